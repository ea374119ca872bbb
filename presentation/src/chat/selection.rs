//! Module selection input

use mentor_domain::Module;

/// Interpret selection screen input: a 1-based menu number or a module name.
pub fn parse_selection(input: &str) -> Option<Module> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| Module::ALL.get(i)).copied();
    }
    input.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_follow_menu_order() {
        assert_eq!(parse_selection("1"), Some(Module::Python));
        assert_eq!(parse_selection(" 8 "), Some(Module::AgenticAi));
        assert_eq!(parse_selection("0"), None);
        assert_eq!(parse_selection("9"), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(parse_selection("sql"), Some(Module::Sql));
        assert_eq!(parse_selection("Power BI"), Some(Module::PowerBi));
        assert_eq!(parse_selection("cooking"), None);
        assert_eq!(parse_selection(""), None);
    }
}
