//! 進捗計算モジュール

use chrono::{Datelike, NaiveDate};

/// 年間目標
pub const GOAL: f64 = 10_000.0;

/// ある日付時点での進捗
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    /// 累計
    pub total: f64,
    /// 年初からの経過日数（1月1日 = 1）
    pub day_of_year: u32,
    /// その年の日数
    pub days_in_year: u32,
    /// 経過日数に応じた期待値
    pub expected: f64,
    /// 期待値との差（正なら先行）
    pub delta: f64,
    /// 年末までの残り日数
    pub days_remaining: u32,
    /// 目標達成に必要な1日あたりの回数（最終日はNone）
    pub required_daily_rate: Option<f64>,
}

impl Progress {
    /// 累計と日付から進捗を計算
    pub fn compute(total: f64, today: NaiveDate) -> Self {
        let day_of_year = today.ordinal();
        let days_in_year = days_in_year(today.year());
        let expected = GOAL * day_of_year as f64 / days_in_year as f64;
        let days_remaining = days_in_year - day_of_year;

        let required_daily_rate = if days_remaining > 0 {
            Some((GOAL - total).max(0.0) / days_remaining as f64)
        } else {
            None
        };

        Self {
            total,
            day_of_year,
            days_in_year,
            expected,
            delta: total - expected,
            days_remaining,
            required_daily_rate,
        }
    }

    /// 目標に対する割合（%）
    pub fn percent(&self) -> f64 {
        self.total / GOAL * 100.0
    }

    /// 目標に到達済みか
    pub fn goal_reached(&self) -> bool {
        self.total >= GOAL
    }

    /// 進捗レポートの行を生成
    pub fn report_lines(&self, task: &str) -> Vec<String> {
        let mut lines = vec![
            format!("=== {} の進捗 ===", task),
            format!(
                "累計: {} / {} ({:.1}%)",
                format_amount(self.total),
                format_amount(GOAL),
                self.percent()
            ),
            format!(
                "期待値: {} ({}/{}日目)",
                format_amount(self.expected),
                self.day_of_year,
                self.days_in_year
            ),
        ];

        let delta = format_amount(self.delta.abs());
        if self.delta >= 0.0 {
            lines.push(format!("ペース: {} 先行", delta));
        } else {
            lines.push(format!("ペース: {} 遅れ", delta));
        }

        match self.required_daily_rate {
            Some(rate) => lines.push(format!(
                "必要ペース: 1日あたり {} (残り{}日)",
                format_amount(rate),
                self.days_remaining
            )),
            None if self.goal_reached() => lines.push("今年の目標を達成しました".to_string()),
            None => lines.push(format!(
                "今年の目標は未達です（残り {}）",
                format_amount(GOAL - self.total)
            )),
        }

        lines
    }

    /// 進捗レポートを出力
    pub fn print(&self, task: &str) {
        for line in self.report_lines(task) {
            println!("{}", line);
        }
    }
}

/// 指定年の日数（うるう年は366）
pub fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

/// 数量をフォーマット（整数なら小数点なし、それ以外は小数2桁）
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2023), 365);
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
    }

    #[test]
    fn test_first_day_of_year() {
        let progress = Progress::compute(0.0, date(2023, 1, 1));
        assert_eq!(progress.day_of_year, 1);
        assert_eq!(progress.days_remaining, 364);
        assert!(approx_eq(progress.expected, 10_000.0 / 365.0));
        assert!(approx_eq(progress.required_daily_rate.unwrap(), 10_000.0 / 364.0));
    }

    #[test]
    fn test_midyear_ahead_of_schedule() {
        // 2023-07-02 は 183日目
        let progress = Progress::compute(6_000.0, date(2023, 7, 2));
        assert_eq!(progress.day_of_year, 183);
        let expected = 10_000.0 * 183.0 / 365.0;
        assert!(approx_eq(progress.expected, expected));
        assert!(approx_eq(progress.delta, 6_000.0 - expected));
        assert!(progress.delta > 0.0);
        assert!(approx_eq(progress.required_daily_rate.unwrap(), 4_000.0 / 182.0));
        assert!(approx_eq(progress.percent(), 60.0));
    }

    #[test]
    fn test_leap_year_denominator() {
        let progress = Progress::compute(0.0, date(2024, 12, 30));
        assert_eq!(progress.days_in_year, 366);
        assert_eq!(progress.day_of_year, 365);
        assert_eq!(progress.days_remaining, 1);
    }

    #[test]
    fn test_last_day_has_no_rate() {
        let progress = Progress::compute(9_000.0, date(2023, 12, 31));
        assert_eq!(progress.days_remaining, 0);
        assert_eq!(progress.required_daily_rate, None);
        assert!(approx_eq(progress.expected, GOAL));
        assert!(progress
            .report_lines("pushups")
            .iter()
            .any(|l| l.contains("未達")));
    }

    #[test]
    fn test_last_day_goal_reached() {
        let progress = Progress::compute(10_500.0, date(2023, 12, 31));
        assert!(progress.goal_reached());
        assert!(progress
            .report_lines("pushups")
            .iter()
            .any(|l| l.contains("達成しました")));
    }

    #[test]
    fn test_rate_is_zero_once_goal_reached() {
        let progress = Progress::compute(12_000.0, date(2023, 6, 1));
        assert_eq!(progress.required_daily_rate, Some(0.0));
    }

    #[test]
    fn test_report_lines_behind() {
        let progress = Progress::compute(15.0, date(2023, 3, 1));
        let lines = progress.report_lines("pushups");
        assert_eq!(lines[0], "=== pushups の進捗 ===");
        assert!(lines[1].starts_with("累計: 15 / 10000"));
        assert!(lines.iter().any(|l| l.contains("遅れ")));
        assert!(lines.iter().any(|l| l.contains("必要ペース")));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(15.0), "15");
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(27.3972), "27.40");
    }
}
