/// Split `s` at every `d`, keeping empty fields.
///
/// ("",  '.') -> [""]
/// ("..", '.') -> ["", "", ""]
/// ("11.", '.') -> ["11", ""]
/// (".11", '.') -> ["", "11"]
pub fn split(s: &str, d: char) -> Vec<&str> {
    s.split(d).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn some_tests() {
        assert_eq!(vec![""], split("", '.'));
        assert_eq!(vec!["11"], split("11", '.'));
        assert_eq!(vec!["", "", ""], split("..", '.'));
        assert_eq!(vec!["11", ""], split("11.", '.'));
        assert_eq!(vec!["", "11"], split(".11", '.'));
        assert_eq!(vec!["11", "22"], split("11.22", '.'));
        assert_eq!(
            vec!["1.1.234.8", "someother", "1"],
            split("1.1.234.8\tsomeother\t1", '\t')
        );
    }

    #[quickcheck]
    fn join_restores_input(s: String) -> bool {
        split(&s, '.').join(".") == s
    }

    #[quickcheck]
    fn one_more_field_than_delimiters(s: String) -> bool {
        split(&s, '\t').len() == s.matches('\t').count() + 1
    }
}
