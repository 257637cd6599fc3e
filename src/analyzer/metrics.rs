pub fn percentage(numerator: f64, denominator: f64) -> u32 {
    if denominator <= 0.0 {
        return 0;
    }

    (numerator / denominator * 100.0).round().clamp(0.0, 100.0) as u32
}

pub fn completion_percent(current: f64, target: f64) -> u32 {
    if target <= 0.0 {
        return 0;
    }

    (current / target * 100.0).round().max(0.0) as u32
}

pub fn format_hours(hours: f64) -> String {
    format!("{hours}h")
}

pub fn format_duration_seconds(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let remain_seconds = seconds % 60;

    if hours > 0 {
        if remain_seconds == 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{hours}h {minutes}m {remain_seconds}s")
        }
    } else if minutes > 0 {
        if remain_seconds == 0 {
            format!("{minutes}m")
        } else {
            format!("{minutes}m {remain_seconds}s")
        }
    } else {
        format!("{remain_seconds}s")
    }
}

pub fn format_clock(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let remain_seconds = seconds % 60;

    format!("{hours:02}:{minutes:02}:{remain_seconds:02}")
}

pub fn format_relative_minutes(minutes: u32) -> String {
    if minutes == 0 {
        return "just now".to_string();
    }

    if minutes < 60 {
        return format!("{minutes} minute{} ago", plural(minutes));
    }

    if minutes < 1440 {
        let hours = minutes / 60;
        return format!("{hours} hour{} ago", plural(hours));
    }

    let days = minutes / 1440;
    format!("{days} day{} ago", plural(days))
}

pub fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn plural(count: u32) -> &'static str {
    if count == 1 { "" } else { "s" }
}
