/// Splits a version such as `1.2.3` or `v1.0.0-rc1` into its major, minor and patch numbers.
pub fn parse(version: &str) -> Option<(u64, u64, u64)> {
    let mut parts = version
        .strip_prefix('v')
        .unwrap_or(version)
        .split(|c: char| !c.is_ascii_digit())
        .map(|p| p.parse::<u64>().ok());

    Some((parts.next()??, parts.next()??, parts.next()??))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_version() {
        assert_eq!(Some((0, 1, 0)), parse("0.1.0"));
        assert_eq!(Some((12, 3, 45)), parse("v12.3.45"));
    }

    #[test]
    fn test_parse_prerelease_and_git_describe_versions() {
        assert_eq!(Some((1, 0, 0)), parse("1.0.0-rc1"));
        assert_eq!(Some((4, 2, 1)), parse("4.2.1-3-gdeadbee"));
    }

    #[test]
    fn test_parse_rejects_incomplete_versions() {
        assert_eq!(None, parse("1.2"));
        assert_eq!(None, parse("1..2"));
        assert_eq!(None, parse(""));
    }

    #[test]
    fn test_build_exports_version_parts() {
        let (major, minor, patch) =
            parse(env!("KALMAN1D_VERSION")).expect("build exports a parseable version");

        assert_eq!(major.to_string(), env!("KALMAN1D_VERSION_MAJOR"));
        assert_eq!(minor.to_string(), env!("KALMAN1D_VERSION_MINOR"));
        assert_eq!(patch.to_string(), env!("KALMAN1D_VERSION_PATCH"));
    }
}
