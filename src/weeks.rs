//! Static week-by-week reference data (1-42): size comparison, rough
//! height/weight, days left to full term. Display text only, none of it
//! feeds back into the date math.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyBabyMetrics {
    pub week: i64,
    pub size_comparison: &'static str,
    pub height_cm: f64,
    pub weight_grams: f64,
    pub days_left_to_term: i64,
}

const WEEKLY_BABY_METRICS: [WeeklyBabyMetrics; 42] = [
    WeeklyBabyMetrics { week: 1, size_comparison: "smaller than a poppy seed", height_cm: 0.0, weight_grams: 0.0, days_left_to_term: 273 },
    WeeklyBabyMetrics { week: 2, size_comparison: "a poppy seed", height_cm: 0.0, weight_grams: 0.0, days_left_to_term: 266 },
    WeeklyBabyMetrics { week: 3, size_comparison: "a sesame seed", height_cm: 0.0, weight_grams: 0.0, days_left_to_term: 259 },
    WeeklyBabyMetrics { week: 4, size_comparison: "a poppyseed", height_cm: 0.1, weight_grams: 0.4, days_left_to_term: 252 },
    WeeklyBabyMetrics { week: 5, size_comparison: "an apple seed", height_cm: 0.4, weight_grams: 1.3, days_left_to_term: 245 },
    WeeklyBabyMetrics { week: 6, size_comparison: "a sweet pea", height_cm: 0.6, weight_grams: 3.0, days_left_to_term: 238 },
    WeeklyBabyMetrics { week: 7, size_comparison: "a blueberry", height_cm: 1.3, weight_grams: 5.0, days_left_to_term: 231 },
    WeeklyBabyMetrics { week: 8, size_comparison: "a kidney bean", height_cm: 1.6, weight_grams: 7.0, days_left_to_term: 224 },
    WeeklyBabyMetrics { week: 9, size_comparison: "a grape", height_cm: 2.3, weight_grams: 10.0, days_left_to_term: 217 },
    WeeklyBabyMetrics { week: 10, size_comparison: "a kumquat", height_cm: 3.1, weight_grams: 14.0, days_left_to_term: 210 },
    WeeklyBabyMetrics { week: 11, size_comparison: "a fig", height_cm: 4.1, weight_grams: 18.0, days_left_to_term: 203 },
    WeeklyBabyMetrics { week: 12, size_comparison: "a lime", height_cm: 5.4, weight_grams: 25.0, days_left_to_term: 196 },
    WeeklyBabyMetrics { week: 13, size_comparison: "a peapod", height_cm: 7.4, weight_grams: 33.0, days_left_to_term: 189 },
    WeeklyBabyMetrics { week: 14, size_comparison: "a lemon", height_cm: 8.7, weight_grams: 45.0, days_left_to_term: 182 },
    WeeklyBabyMetrics { week: 15, size_comparison: "an apple", height_cm: 10.1, weight_grams: 78.0, days_left_to_term: 175 },
    WeeklyBabyMetrics { week: 16, size_comparison: "a pear", height_cm: 11.6, weight_grams: 110.0, days_left_to_term: 168 },
    WeeklyBabyMetrics { week: 17, size_comparison: "a pomegranate", height_cm: 13.0, weight_grams: 150.0, days_left_to_term: 161 },
    WeeklyBabyMetrics { week: 18, size_comparison: "a bell pepper", height_cm: 14.2, weight_grams: 190.0, days_left_to_term: 154 },
    WeeklyBabyMetrics { week: 19, size_comparison: "a mango", height_cm: 15.3, weight_grams: 240.0, days_left_to_term: 147 },
    WeeklyBabyMetrics { week: 20, size_comparison: "a banana", height_cm: 16.5, weight_grams: 300.0, days_left_to_term: 140 },
    WeeklyBabyMetrics { week: 21, size_comparison: "a carrot", height_cm: 26.7, weight_grams: 360.0, days_left_to_term: 133 },
    WeeklyBabyMetrics { week: 22, size_comparison: "a spaghetti squash", height_cm: 27.8, weight_grams: 430.0, days_left_to_term: 126 },
    WeeklyBabyMetrics { week: 23, size_comparison: "a large mango", height_cm: 28.9, weight_grams: 500.0, days_left_to_term: 119 },
    WeeklyBabyMetrics { week: 24, size_comparison: "an ear of corn", height_cm: 30.0, weight_grams: 600.0, days_left_to_term: 112 },
    WeeklyBabyMetrics { week: 25, size_comparison: "a rutabaga", height_cm: 34.6, weight_grams: 660.0, days_left_to_term: 105 },
    WeeklyBabyMetrics { week: 26, size_comparison: "a scallion", height_cm: 35.6, weight_grams: 760.0, days_left_to_term: 98 },
    WeeklyBabyMetrics { week: 27, size_comparison: "a cauliflower", height_cm: 36.6, weight_grams: 875.0, days_left_to_term: 91 },
    WeeklyBabyMetrics { week: 28, size_comparison: "an eggplant", height_cm: 37.6, weight_grams: 1000.0, days_left_to_term: 84 },
    WeeklyBabyMetrics { week: 29, size_comparison: "a butternut squash", height_cm: 38.6, weight_grams: 1150.0, days_left_to_term: 77 },
    WeeklyBabyMetrics { week: 30, size_comparison: "a large cabbage", height_cm: 39.9, weight_grams: 1320.0, days_left_to_term: 70 },
    WeeklyBabyMetrics { week: 31, size_comparison: "a coconut", height_cm: 41.1, weight_grams: 1500.0, days_left_to_term: 63 },
    WeeklyBabyMetrics { week: 32, size_comparison: "a jicama", height_cm: 42.4, weight_grams: 1700.0, days_left_to_term: 56 },
    WeeklyBabyMetrics { week: 33, size_comparison: "a pineapple", height_cm: 43.7, weight_grams: 1900.0, days_left_to_term: 49 },
    WeeklyBabyMetrics { week: 34, size_comparison: "a cantaloupe", height_cm: 45.0, weight_grams: 2150.0, days_left_to_term: 42 },
    WeeklyBabyMetrics { week: 35, size_comparison: "a honeydew melon", height_cm: 46.2, weight_grams: 2400.0, days_left_to_term: 35 },
    WeeklyBabyMetrics { week: 36, size_comparison: "a head of romaine lettuce", height_cm: 47.4, weight_grams: 2650.0, days_left_to_term: 28 },
    WeeklyBabyMetrics { week: 37, size_comparison: "a bunch of Swiss chard", height_cm: 48.6, weight_grams: 2900.0, days_left_to_term: 21 },
    WeeklyBabyMetrics { week: 38, size_comparison: "a leek", height_cm: 49.8, weight_grams: 3100.0, days_left_to_term: 14 },
    WeeklyBabyMetrics { week: 39, size_comparison: "a mini watermelon", height_cm: 50.7, weight_grams: 3300.0, days_left_to_term: 7 },
    WeeklyBabyMetrics { week: 40, size_comparison: "a small pumpkin", height_cm: 51.2, weight_grams: 3400.0, days_left_to_term: 0 },
    WeeklyBabyMetrics { week: 41, size_comparison: "a watermelon", height_cm: 51.5, weight_grams: 3500.0, days_left_to_term: 0 },
    WeeklyBabyMetrics { week: 42, size_comparison: "a watermelon", height_cm: 51.7, weight_grams: 3600.0, days_left_to_term: 0 },
];

pub fn all() -> &'static [WeeklyBabyMetrics] {
    &WEEKLY_BABY_METRICS
}

pub fn metrics_for_week(week: i64) -> Option<&'static WeeklyBabyMetrics> {
    if (1..=42).contains(&week) {
        WEEKLY_BABY_METRICS.iter().find(|m| m.week == week)
    } else {
        None
    }
}

pub fn title_for_week(week: i64) -> String {
    match week {
        13 => "Week 13 - Second Trimester Begins".to_string(),
        20 => "Week 20 - Halfway Point!".to_string(),
        28 => "Week 28 - Third Trimester Begins".to_string(),
        40 => "Week 40 - Due Date!".to_string(),
        _ => format!("Week {}", week),
    }
}

pub fn tip_for_week(week: i64) -> &'static str {
    match week {
        w if w < 5 => "Take prenatal vitamins with folic acid to support early development.",
        w if w < 9 => "Stay hydrated and eat small, frequent meals to combat morning sickness.",
        w if w < 13 => "Your baby's organs are developing. Avoid alcohol and limit caffeine.",
        w if w < 17 => "You might start feeling better as morning sickness subsides.",
        w if w < 21 => "You may start to feel your baby move! It often feels like flutters.",
        w if w < 25 => "Your baby can now hear your voice. Talk and sing to your baby!",
        w if w < 29 => "Stay active with pregnancy-safe exercises like walking and swimming.",
        w if w < 33 => "Start preparing for your baby's arrival by setting up the nursery.",
        w if w < 37 => "Pack your hospital bag and finalize your birth plan.",
        _ => "Your baby is considered full-term! Labor could begin anytime now.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_cover_exactly_weeks_1_to_42() {
        assert_eq!(all().len(), 42);
        for (i, m) in all().iter().enumerate() {
            assert_eq!(m.week, i as i64 + 1);
        }
    }

    #[test]
    fn test_metrics_lookup_bounds() {
        assert!(metrics_for_week(0).is_none());
        assert!(metrics_for_week(43).is_none());
        assert_eq!(metrics_for_week(1).unwrap().size_comparison, "smaller than a poppy seed");
        assert_eq!(metrics_for_week(20).unwrap().size_comparison, "a banana");
        assert_eq!(metrics_for_week(42).unwrap().days_left_to_term, 0);
    }

    #[test]
    fn test_tip_banding() {
        assert_eq!(tip_for_week(4), tip_for_week(1));
        assert_ne!(tip_for_week(4), tip_for_week(5));
        assert!(tip_for_week(40).contains("full-term"));
    }

    #[test]
    fn test_week_titles() {
        assert_eq!(title_for_week(7), "Week 7");
        assert!(title_for_week(20).contains("Halfway"));
    }
}
