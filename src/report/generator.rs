//! Markdown and JSON report generation.
//!
//! This module renders a [`Report`] built from the aggregation results.

use crate::models::{
    BenchmarkReport, DepartmentActivity, Employee, GenderDepartmentGroups, Report, ReportMetadata,
    Salary, SalaryStatistics, TenuredEmployee,
};
use anyhow::Result;
use std::collections::BTreeMap;

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &Report) -> String {
    let mut output = String::new();

    output.push_str("# Roster Report\n\n");

    output.push_str(&generate_metadata_section(&report.metadata));

    output.push_str(&format!(
        "## Department: {}\n\n",
        report.department_members.department
    ));
    output.push_str(&generate_employee_table(&report.department_members.employees));

    output.push_str("## Sorted by Name\n\n");
    output.push_str(&generate_employee_table(&report.sorted_by_name));

    output.push_str(&generate_headcount_section(&report.headcount_by_department));

    output.push_str(&format!("## Hired in {}\n\n", report.monthly_hires.month));
    output.push_str(&generate_employee_table(&report.monthly_hires.employees));

    output.push_str(&generate_salary_section(report.active_salary_statistics.as_ref()));

    output.push_str(&generate_grouping_section(
        &report.active_by_gender_and_department,
    ));

    output.push_str(&generate_seniority_section(&report.most_senior));

    output.push_str(&generate_activity_section(&report.activity_by_department));

    if let Some(ref benchmark) = report.benchmark {
        output.push_str(&generate_benchmark_section(benchmark));
    }

    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!(
        "- **Generated:** {}\n",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!(
        "- **Reference Date:** {}\n",
        metadata.reference_date
    ));
    section.push_str(&format!(
        "- **Employees:** {} ({} active)\n",
        metadata.total_employees, metadata.active_employees
    ));
    section.push_str(&format!(
        "- **Duration:** {:.3}s\n\n",
        metadata.duration_seconds
    ));

    section
}

/// Render employees as a Markdown table.
fn generate_employee_table(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return "No matching employees.\n\n".to_string();
    }

    let mut table = String::new();

    table.push_str("| Name | Gender | Department | Job Title | Salary | Hired | Status |\n");
    table.push_str("|:---|:---:|:---|:---|---:|:---:|:---|\n");

    for e in employees {
        let status = match e.termination_date() {
            Some(date) => format!("Terminated {}", date),
            None => "Active".to_string(),
        };
        table.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            e.full_name(),
            e.gender,
            e.department,
            e.job_title,
            e.salary,
            e.hire_date,
            status
        ));
    }
    table.push('\n');

    table
}

fn generate_headcount_section(counts: &BTreeMap<String, usize>) -> String {
    let mut section = String::new();

    section.push_str("## Headcount by Department\n\n");
    if counts.is_empty() {
        section.push_str("No employees.\n\n");
        return section;
    }

    section.push_str("| Department | Employees |\n");
    section.push_str("|:---|:---:|\n");
    for (department, count) in counts {
        section.push_str(&format!("| {} | {} |\n", department, count));
    }
    section.push('\n');

    section
}

/// Generate the active salary statistics section.
fn generate_salary_section(stats: Option<&SalaryStatistics>) -> String {
    let mut section = String::new();

    section.push_str("## Active Salary Statistics\n\n");

    match stats {
        Some(stats) => {
            section.push_str(&format!("- **Minimum:** ${}\n", stats.min));
            section.push_str(&format!("- **Maximum:** ${}\n", stats.max));
            section.push_str(&format!("- **Average:** ${}\n", stats.mean));
            section.push_str(&format!("- **Active Employees:** {}\n\n", stats.count));
        }
        None => section.push_str("No active employees.\n\n"),
    }

    section
}

fn generate_grouping_section(groups: &GenderDepartmentGroups) -> String {
    let mut section = String::new();

    section.push_str("## Active Employees by Gender and Department\n\n");
    if groups.is_empty() {
        section.push_str("No active employees.\n\n");
        return section;
    }

    for (gender, departments) in groups {
        section.push_str(&format!("### Gender: {}\n\n", gender));
        for (department, employees) in departments {
            section.push_str(&format!(
                "- **{}** - {} employee(s)\n",
                department,
                employees.len()
            ));
            for e in employees {
                section.push_str(&format!("  - {}\n", e.full_name()));
            }
        }
        section.push('\n');
    }

    section
}

fn generate_seniority_section(most_senior: &[TenuredEmployee]) -> String {
    let mut section = String::new();

    section.push_str(&format!(
        "## Top {} Employees by Seniority\n\n",
        most_senior.len()
    ));
    if most_senior.is_empty() {
        section.push_str("No active employees.\n\n");
        return section;
    }

    for (i, t) in most_senior.iter().enumerate() {
        section.push_str(&format!(
            "{}. {} - hired {} ({} year{})\n",
            i + 1,
            t.employee.full_name(),
            t.employee.hire_date,
            t.years,
            if t.years == 1 { "" } else { "s" }
        ));
    }
    section.push('\n');

    section
}

fn generate_activity_section(activity: &BTreeMap<String, DepartmentActivity>) -> String {
    let mut section = String::new();

    section.push_str("## Active Employees by Department\n\n");
    if activity.is_empty() {
        section.push_str("No employees.\n\n");
        return section;
    }

    section.push_str("| Department | Active | Total | Active % |\n");
    section.push_str("|:---|:---:|:---:|---:|\n");
    for (department, a) in activity {
        section.push_str(&format!(
            "| {} | {} | {} | {:.2}% |\n",
            department, a.active, a.total, a.percentage
        ));
    }
    section.push('\n');

    section
}

/// Generate the sequential vs. parallel benchmark section.
fn generate_benchmark_section(benchmark: &BenchmarkReport) -> String {
    let mut section = String::new();

    section.push_str("## Sequential vs. Parallel\n\n");
    section.push_str(&format!(
        "*{} generated employees (seed {}, {} threads, generated in {:.0} ms)*\n\n",
        benchmark.size, benchmark.seed, benchmark.threads, benchmark.generation_ms
    ));

    let average = |value: &Option<Salary>| match value {
        Some(salary) => format!("${}", salary),
        None => "n/a".to_string(),
    };

    section.push_str("| Task | Mode | Result | Time (ms) |\n");
    section.push_str("|:---|:---|:---|---:|\n");
    section.push_str(&format!(
        "| Average salary | sequential | {} | {:.1} |\n",
        average(&benchmark.average_salary.sequential),
        benchmark.average_salary.sequential_ms
    ));
    section.push_str(&format!(
        "| Average salary | parallel | {} | {:.1} |\n",
        average(&benchmark.average_salary.parallel),
        benchmark.average_salary.parallel_ms
    ));
    section.push_str(&format!(
        "| Headcount by department | sequential | {} | {:.1} |\n",
        format_counts(&benchmark.department_counts.sequential),
        benchmark.department_counts.sequential_ms
    ));
    section.push_str(&format!(
        "| Headcount by department | parallel | {} | {:.1} |\n\n",
        format_counts(&benchmark.department_counts.parallel),
        benchmark.department_counts.parallel_ms
    ));

    for (task, speedup) in [
        ("Average salary", benchmark.average_salary.speedup()),
        ("Headcount by department", benchmark.department_counts.speedup()),
    ] {
        if let Some(speedup) = speedup {
            section.push_str(&format!("- {} speedup: {:.2}x\n", task, speedup));
        }
    }
    section.push('\n');

    section
}

fn format_counts(counts: &BTreeMap<String, usize>) -> String {
    counts
        .iter()
        .map(|(department, count)| format!("{}: {}", department, count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generate a JSON report.
pub fn generate_json_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
