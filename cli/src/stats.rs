use chrono::NaiveDate;

use piecework_core::{Balance, SalaryConfig, ScheduleMonthReport, StatisticsReport};

/// Six-figure earnings card for the month, teletype edition.
pub fn render_report(today: NaiveDate, report: &StatisticsReport) {
    println!("Statistics for {}", today.format("%B %Y"));
    println!("{:-<38}", "");
    println!("{:<22} {:>14.2}", "Income (revenue)", report.income);
    println!("{:<22} {:>14.2}", "Base salary", report.base_salary);
    println!("{:<22} {:>13.1}h", "Hours worked", report.hours_worked);
    println!("{:<22} {:>12.2}/h", "Hourly rate", report.hourly_rate);
    println!("{:<22} {:>14.2}", "Tax", report.tax_amount);
    println!("{:-<38}", "");
    let marker = match report.balance() {
        Balance::Income => "+",
        Balance::Expense => "-",
    };
    println!("{:<22} {:>13.2} {}", "Net (take-home)", report.final_amount, marker);
}

pub fn render_overview(
    year: i32,
    month: u32,
    overview: &ScheduleMonthReport,
    work_days: &[NaiveDate],
) {
    println!(
        "Schedule {} for {:04}-{:02} ({}h per shift)",
        overview.schedule.as_str(),
        year,
        month,
        overview.hours_per_shift
    );
    println!("{:-<38}", "");
    println!("{:<22} {:>13}", "Pattern work days", overview.work_days);
    println!("{:<22} {:>12.1}h", "Auto hours", overview.auto_hours);
    println!("{:<22} {:>12.1}h", "Manual hours", overview.manual_hours);
    println!("{:<22} {:>12.1}h", "Total hours", overview.total_hours);
    println!("{:<22} {:>12.1}h", "Monthly norm", overview.norm_hours);
    println!("{:<22} {:>12.1}h", "Overtime", overview.overtime);

    if !work_days.is_empty() {
        println!();
        for day in work_days {
            println!("  {} {}", day, day.format("%a"));
        }
    }
}

pub fn render_settings(config: &SalaryConfig) {
    println!("{:<22} {:>14.2}", "Base salary", config.base_salary);
    println!("{:<22} {:>13.1}%", "Tax rate", config.tax_rate);
    println!("{:<22} {:>14.2}", "Advance", config.advance_amount);
    println!("{:<22} {:>14}", "Schedule", config.work_schedule.as_str());
    println!("{:<22} {:>13.1}h", "Hours per shift", config.hours_per_shift);
    println!("{:<22} {:>13.1}h", "Manual default", config.manual_default_hours);
    println!("{:<22} {:>13.1}h", "Monthly norm", config.norm_hours_per_month);
    println!("{:<22} {:>14}", "Schedule start", config.schedule_start_date);
}
