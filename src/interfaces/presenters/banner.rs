use colored::{ColoredString, Colorize};

use crate::use_cases::{Banner, BannerKind};

pub fn render_banner(banner: &Banner) -> ColoredString {
    match banner.kind {
        BannerKind::Success => banner.text.as_str().green().bold(),
        BannerKind::Info => banner.text.as_str().blue(),
        BannerKind::Error => banner.text.as_str().red().bold(),
    }
}
