use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // 只匹配开头，后面多余的字符忽略
    static ref ISO_DURATION: Regex =
        Regex::new(r"^PT(?:([0-9]+)H)?(?:([0-9]+)M)?(?:([0-9]+)S)?").unwrap();
}

/// 解析 `PT#H#M#S` 格式的时长，返回总秒数
///
/// 不匹配的输入（直播的占位时长、`P1D` 之类）一律返回 0，不会报错。
pub fn parse_duration(text: &str) -> u64 {
    ISO_DURATION
        .captures(text)
        .and_then(|caps| total_seconds(&caps))
        .unwrap_or(0)
}

// 缺省的分量记为 0，数字溢出返回 None
fn total_seconds(caps: &Captures<'_>) -> Option<u64> {
    let component = |idx: usize| match caps.get(idx) {
        Some(m) => m.as_str().parse::<u64>().ok(),
        None => Some(0),
    };

    let hours = component(1)?;
    let minutes = component(2)?;
    let seconds = component(3)?;

    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

/// 格式化为 `H:MM:SS`，不足一小时为 `M:SS`，小时数不限宽度
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}

/// 秒数编码回 ISO-8601 时长，0 秒编码为 `PT0S`
pub fn to_iso(seconds: u64) -> String {
    if seconds == 0 {
        return "PT0S".to_string();
    }

    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let mut out = String::from("PT");
    if hours > 0 {
        out.push_str(&format!("{}H", hours));
    }
    if mins > 0 {
        out.push_str(&format!("{}M", mins));
    }
    if secs > 0 {
        out.push_str(&format!("{}S", secs));
    }
    out
}
