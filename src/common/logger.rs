use colored::*;

/// 漂亮的终端输出工具
pub struct PrettyLogger;

impl PrettyLogger {
    /// 显示成功消息
    pub fn success(message: impl AsRef<str>) {
        println!("{} {}", "✓".green().bold(), message.as_ref());
    }

    /// 显示错误消息
    pub fn error(message: impl AsRef<str>) {
        eprintln!("{} {}", "✗".red().bold(), message.as_ref());
    }

    /// 显示视频信息
    pub fn video_info(title: impl AsRef<str>, ext: impl AsRef<str>) {
        println!("{} {} ({})", "🎬".magenta().bold(), title.as_ref().bold(), ext.as_ref().cyan());
    }

    /// 显示播放列表信息
    pub fn playlist_info(title: impl AsRef<str>, count: usize) {
        println!("{} {} ({} 个分段)", "📃".magenta().bold(), title.as_ref().bold(), count.to_string().cyan());
    }

    /// 显示单个字段
    pub fn field(label: impl AsRef<str>, value: impl AsRef<str>) {
        println!("  {}: {}", label.as_ref().bright_black(), value.as_ref());
    }

    /// 显示播放列表条目
    pub fn entry(index: usize, url: impl AsRef<str>) {
        println!("  {} {}", format!("[{:>2}]", index).cyan(), url.as_ref());
    }

    /// 显示分割线
    pub fn separator() {
        println!("{}", "─".repeat(50).bright_black());
    }
}

#[macro_export]
macro_rules! log_success {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::success(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::error(format!($($arg)*))
    };
}
