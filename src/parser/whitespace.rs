//! 页面文本中的空白字符
//!
//! 与 Unicode `White_Space` 不同：包含 U+FEFF，不包含 U+0085。
//! 字段标签与选项行的匹配、取值后的首尾裁剪都使用这一字符集。

/// 正则字符类形式
pub const SPACE_CLASS: &str =
    r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// 值的行终止符：换行、回车、U+2028、U+2029
pub const LINE_REST: &str = r"[^\n\r\x{2028}\x{2029}]*";

pub fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// 去除首尾空白
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}
