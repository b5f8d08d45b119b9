//! Terminal capability checks for console output and prompts

use is_terminal::IsTerminal;

pub fn stdin_is_terminal() -> bool {
    std::io::stdin().is_terminal()
}

pub fn supports_unicode() -> bool {
    supports_unicode_impl(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

fn supports_unicode_impl(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    let term = get_env("TERM").unwrap_or_default();
    if !is_tty || term.eq_ignore_ascii_case("dumb") {
        return false;
    }

    for key in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Some(value) = get_env(key).filter(|v| !v.is_empty()) {
            let value = value.to_lowercase();
            return value.contains("utf-8") || value.contains("utf8");
        }
    }
    true
}
