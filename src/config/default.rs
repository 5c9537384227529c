// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::JclConfig;

/// Get the default configuration.
pub fn default_config() -> JclConfig {
    JclConfig::default()
}

/// Generate an example configuration file.
///
/// Every override is commented out, so the file parses to the built-in policy.
pub fn example_config() -> &'static str {
    r##"# jclint configuration
#
# The built-in policy enforces Conventional Commits with a required scope
# and Japanese subject/body text. Uncomment entries to override a rule.
#
# level: "disabled" | "warning" | "error" (or 0 | 1 | 2)
# when:  "always" | "never"
# value: rule parameter (length, list of types, case name, character)

# [rules."type-enum"]
# value = ["build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test"]

# [rules."header-max-length"]
# value = 100

# [rules."body-leading-blank"]
# level = "warning"

# [rules."subject-case"]
# level = "disabled"

# [rules."subject-japanese"]
# level = "error"
# when = "always"

# Parser configuration
[parser]
comment_char = "#"

# CI-specific behaviour
[ci]
fail_on_warning = false
"##
}
