use chrono::NaiveDate;
use portfolio_pulse_core::models::chart::ChartDataPoint;
use portfolio_pulse_core::models::goal::GoalSpec;
use portfolio_pulse_core::models::metrics::{GoalProgress, PeriodMetrics};
use portfolio_pulse_core::models::preferences::ChartPreferences;
use portfolio_pulse_core::models::series::ValuePoint;
use portfolio_pulse_core::models::window::{Granularity, TimeWindow, WindowPreset};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Granularity
// ═══════════════════════════════════════════════════════════════════

mod granularity {
    use super::*;

    #[test]
    fn display_daily() {
        assert_eq!(Granularity::Daily.to_string(), "daily");
    }

    #[test]
    fn display_weekly() {
        assert_eq!(Granularity::Weekly.to_string(), "weekly");
    }

    #[test]
    fn display_monthly() {
        assert_eq!(Granularity::Monthly.to_string(), "monthly");
    }

    #[test]
    fn step_sizes() {
        assert_eq!(Granularity::Daily.step_size_days(), 1);
        assert_eq!(Granularity::Weekly.step_size_days(), 7);
        assert_eq!(Granularity::Monthly.step_size_days(), 30);
    }

    #[test]
    fn parse_lowercase() {
        assert_eq!("daily".parse::<Granularity>().unwrap(), Granularity::Daily);
        assert_eq!("weekly".parse::<Granularity>().unwrap(), Granularity::Weekly);
        assert_eq!(
            "monthly".parse::<Granularity>().unwrap(),
            Granularity::Monthly
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("WEEKLY".parse::<Granularity>().unwrap(), Granularity::Weekly);
        assert_eq!(
            " Monthly ".parse::<Granularity>().unwrap(),
            Granularity::Monthly
        );
    }

    #[test]
    fn parse_unknown_fails() {
        assert!("hourly".parse::<Granularity>().is_err());
        assert!("".parse::<Granularity>().is_err());
    }

    #[test]
    fn serde_roundtrip_json() {
        for g in [Granularity::Daily, Granularity::Weekly, Granularity::Monthly] {
            let json = serde_json::to_string(&g).unwrap();
            let back: Granularity = serde_json::from_str(&json).unwrap();
            assert_eq!(g, back);
        }
    }

    #[test]
    fn serde_uses_lowercase_strings() {
        assert_eq!(
            serde_json::to_string(&Granularity::Weekly).unwrap(),
            "\"weekly\""
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
//  WindowPreset
// ═══════════════════════════════════════════════════════════════════

mod window_preset {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(WindowPreset::OneDay.label(), "1D");
        assert_eq!(WindowPreset::OneWeek.label(), "1W");
        assert_eq!(WindowPreset::OneMonth.label(), "1M");
        assert_eq!(WindowPreset::ThreeMonths.label(), "3M");
        assert_eq!(WindowPreset::SixMonths.label(), "6M");
        assert_eq!(WindowPreset::OneYear.label(), "1Y");
        assert_eq!(WindowPreset::All.label(), "ALL");
    }

    #[test]
    fn one_week_catalog_numbers() {
        // 10 weeks of 7 days on each side of today
        assert_eq!(WindowPreset::OneWeek.lookback_units(), Some(10));
        assert_eq!(WindowPreset::OneWeek.unit_size_days(), Some(7));
        assert_eq!(WindowPreset::OneWeek.half_range_days(), Some(70));
    }

    #[test]
    fn half_ranges() {
        assert_eq!(WindowPreset::OneDay.half_range_days(), Some(10));
        assert_eq!(WindowPreset::OneMonth.half_range_days(), Some(300));
        assert_eq!(WindowPreset::ThreeMonths.half_range_days(), Some(900));
        assert_eq!(WindowPreset::SixMonths.half_range_days(), Some(1800));
        assert_eq!(WindowPreset::OneYear.half_range_days(), Some(3650));
    }

    #[test]
    fn all_preset_is_unbounded() {
        assert_eq!(WindowPreset::All.lookback_units(), None);
        assert_eq!(WindowPreset::All.unit_size_days(), None);
        assert_eq!(WindowPreset::All.half_range_days(), None);
    }

    #[test]
    fn label_parse_roundtrip() {
        for preset in WindowPreset::all() {
            let parsed: WindowPreset = preset.label().parse().unwrap();
            assert_eq!(parsed, preset);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("1m".parse::<WindowPreset>().unwrap(), WindowPreset::OneMonth);
        assert_eq!("all".parse::<WindowPreset>().unwrap(), WindowPreset::All);
    }

    #[test]
    fn parse_unknown_fails() {
        assert!("2W".parse::<WindowPreset>().is_err());
        assert!("".parse::<WindowPreset>().is_err());
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(WindowPreset::SixMonths.to_string(), "6M");
    }

    #[test]
    fn all_lists_every_preset_once() {
        let presets = WindowPreset::all();
        assert_eq!(presets.len(), 7);
        let labels: std::collections::HashSet<&str> =
            presets.iter().map(|p| p.label()).collect();
        assert_eq!(labels.len(), 7);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  TimeWindow
// ═══════════════════════════════════════════════════════════════════

mod time_window {
    use super::*;

    #[test]
    fn default_is_all() {
        assert_eq!(TimeWindow::default(), TimeWindow::all());
        assert_eq!(TimeWindow::all(), TimeWindow::Preset(WindowPreset::All));
    }

    #[test]
    fn serde_roundtrip_custom() {
        let window = TimeWindow::Custom {
            start: d(2024, 1, 1),
            end: d(2024, 6, 30),
        };
        let json = serde_json::to_string(&window).unwrap();
        let back: TimeWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(window, back);
    }

    #[test]
    fn serde_roundtrip_preset() {
        let window = TimeWindow::Preset(WindowPreset::ThreeMonths);
        let json = serde_json::to_string(&window).unwrap();
        let back: TimeWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(window, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  GoalSpec
// ═══════════════════════════════════════════════════════════════════

mod goal_spec {
    use super::*;

    #[test]
    fn active_when_both_set_and_date_in_future() {
        let goal = GoalSpec::new(Some(2000.0), Some(d(2024, 12, 31)), 1000.0);
        assert!(goal.is_active(d(2024, 6, 15)));
    }

    #[test]
    fn inactive_without_target_value() {
        let goal = GoalSpec::new(None, Some(d(2024, 12, 31)), 1000.0);
        assert!(!goal.is_active(d(2024, 6, 15)));
    }

    #[test]
    fn inactive_without_target_date() {
        let goal = GoalSpec::new(Some(2000.0), None, 1000.0);
        assert!(!goal.is_active(d(2024, 6, 15)));
    }

    #[test]
    fn inactive_when_date_is_today() {
        let goal = GoalSpec::new(Some(2000.0), Some(d(2024, 6, 15)), 1000.0);
        assert!(!goal.is_active(d(2024, 6, 15)));
    }

    #[test]
    fn inactive_when_date_in_past() {
        let goal = GoalSpec::new(Some(2000.0), Some(d(2024, 1, 1)), 1000.0);
        assert!(!goal.is_active(d(2024, 6, 15)));
    }

    #[test]
    fn inactive_constructor() {
        let goal = GoalSpec::inactive(1000.0);
        assert_eq!(goal.target_value, None);
        assert_eq!(goal.target_date, None);
        assert_eq!(goal.current_value, 1000.0);
        assert!(!goal.is_active(d(2024, 6, 15)));
    }

    #[test]
    fn serde_defaults_absent_fields_to_none() {
        let goal: GoalSpec = serde_json::from_str(r#"{"current_value": 500.0}"#).unwrap();
        assert_eq!(goal.target_value, None);
        assert_eq!(goal.target_date, None);
        assert_eq!(goal.current_value, 500.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ValuePoint & ChartDataPoint
// ═══════════════════════════════════════════════════════════════════

mod value_point {
    use super::*;

    #[test]
    fn new_sets_fields() {
        let p = ValuePoint::new(d(2024, 3, 1), 1234.5);
        assert_eq!(p.date, d(2024, 3, 1));
        assert_eq!(p.value, 1234.5);
    }

    #[test]
    fn serde_roundtrip() {
        let p = ValuePoint::new(d(2024, 3, 1), 1234.5);
        let json = serde_json::to_string(&p).unwrap();
        let back: ValuePoint = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}

mod chart_data_point {
    use super::*;

    #[test]
    fn actual_constructor() {
        let p = ChartDataPoint::actual(d(2024, 3, 1), 100.0);
        assert_eq!(p.actual, Some(100.0));
        assert_eq!(p.target, None);
    }

    #[test]
    fn target_constructor() {
        let p = ChartDataPoint::target(d(2024, 3, 1), 150.0);
        assert_eq!(p.actual, None);
        assert_eq!(p.target, Some(150.0));
    }

    #[test]
    fn serde_omits_absent_actual() {
        let p = ChartDataPoint::target(d(2024, 3, 1), 150.0);
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("actual"));
        assert!(json.contains("target"));
    }

    #[test]
    fn serde_omits_absent_target() {
        let p = ChartDataPoint::actual(d(2024, 3, 1), 100.0);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("actual"));
        assert!(!json.contains("target"));
    }

    #[test]
    fn serde_keeps_both_when_present() {
        let p = ChartDataPoint {
            date: d(2024, 3, 1),
            actual: Some(100.0),
            target: Some(150.0),
        };
        let json = serde_json::to_string(&p).unwrap();
        let back: ChartDataPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn serde_reads_missing_fields_as_none() {
        let p: ChartDataPoint = serde_json::from_str(r#"{"date": "2024-03-01"}"#).unwrap();
        assert_eq!(p.actual, None);
        assert_eq!(p.target, None);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  PeriodMetrics, GoalProgress & ChartPreferences
// ═══════════════════════════════════════════════════════════════════

mod metrics_models {
    use super::*;

    #[test]
    fn empty_metrics_keeps_portfolio_size() {
        let m = PeriodMetrics::empty(1500.0);
        assert_eq!(m.portfolio_size, 1500.0);
        assert_eq!(m.period_pnl, 0.0);
        assert_eq!(m.period_pnl_pct, 0.0);
        assert_eq!(m.target_value, 0.0);
        assert_eq!(m.delta_to_target, 0.0);
    }

    #[test]
    fn metrics_serialize_all_fields() {
        // Summary cards rely on every field being present
        let json = serde_json::to_string(&PeriodMetrics::empty(0.0)).unwrap();
        for field in [
            "portfolio_size",
            "period_pnl",
            "period_pnl_pct",
            "target_value",
            "delta_to_target",
        ] {
            assert!(json.contains(field), "missing field {field} in {json}");
        }
    }

    #[test]
    fn goal_progress_none_is_all_zero() {
        let g = GoalProgress::none();
        assert_eq!(g.target_value, 0.0);
        assert_eq!(g.target_date, None);
        assert_eq!(g.progress_pct, 0.0);
        assert_eq!(g.required_annual_growth_pct, 0.0);
        assert_eq!(g.delta_to_target, 0.0);
    }

    #[test]
    fn preferences_default_is_daily_all() {
        let prefs = ChartPreferences::default();
        assert_eq!(prefs.granularity, Granularity::Daily);
        assert_eq!(prefs.window, TimeWindow::all());
    }

    #[test]
    fn preferences_serde_roundtrip() {
        let prefs = ChartPreferences {
            granularity: Granularity::Monthly,
            window: TimeWindow::Preset(WindowPreset::OneYear),
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let back: ChartPreferences = serde_json::from_str(&json).unwrap();
        assert_eq!(prefs, back);
    }
}
