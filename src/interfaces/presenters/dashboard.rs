use std::fmt;

use crate::use_cases::dashboard::{DashboardStats, Metric, MetricStatus};

pub struct DashboardView<'a> {
    stats: &'a DashboardStats,
}

impl<'a> DashboardView<'a> {
    pub fn new(stats: &'a DashboardStats) -> Self {
        DashboardView { stats }
    }
}

fn tile<T: fmt::Display>(f: &mut fmt::Formatter<'_>, label: &str, metric: &Metric<T>) -> fmt::Result {
    match &metric.status {
        MetricStatus::Failed(reason) => {
            writeln!(f, "  {:<15} {} (stale: {})", label, metric.value, reason)
        }
        _ => writeln!(f, "  {:<15} {}", label, metric.value),
    }
}

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats;

        writeln!(f, "Dashboard")?;
        tile(f, "Total Profiles", &stats.total_profiles)?;
        tile(f, "Total Projects", &stats.total_projects)?;
        let unique = Metric { value: stats.unique_skills(), status: stats.top_skills.status.clone() };
        tile(f, "Unique Skills", &unique)?;

        writeln!(f)?;
        writeln!(f, "Top Skills")?;
        if stats.top_skills.value.is_empty() {
            writeln!(f, "  No skills data available")?;
        }
        for (rank, skill) in stats.top_skills.value.iter().enumerate() {
            let plural = if skill.count == 1 { "" } else { "s" };
            writeln!(
                f,
                "  #{} {:<20} {} developer{}",
                rank + 1,
                skill.skill_name,
                skill.count,
                plural
            )?;
        }
        Ok(())
    }
}
