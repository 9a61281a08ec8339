//! Display-oriented formatting.
//!
//! These functions resolve their input against a working directory, so
//! callers pass `cwd` explicitly instead of the library reading process
//! state.

use crate::path::combine::{combine, combine_normalized};
use crate::path::components::{common_prefix_len, components, strip_prefix};
use crate::path::normalize::{normalize, render};
use crate::path::relative::relative;
use crate::policy::PathPolicy;

const HOME: char = '~';

/// Renders `path` in the shortest form a person would want to read.
///
/// `path` and `relative_to` (default: `cwd`) are resolved against `cwd`.
/// When both land on the same root, the result is either a relative path
/// or the absolute one, whichever has fewer components. On different roots
/// a path under `home` is shown as `~/...`; anything else is shown as the
/// normalized input.
///
/// # Examples
///
/// ```
/// use shellpath::path::format::pretty;
/// use shellpath::PathPolicy;
///
/// let posix = PathPolicy::POSIX;
/// let cwd = "/home/me/src";
/// assert_eq!(pretty(&posix, "proj/lib", cwd, None, None), "proj/lib");
/// assert_eq!(pretty(&posix, "..", cwd, None, None), "..");
/// assert_eq!(pretty(&posix, "/etc/hosts", cwd, None, None), "/etc/hosts");
///
/// let windows = PathPolicy::WINDOWS;
/// let home = Some(r"C:\Users\me");
/// assert_eq!(
///     pretty(&windows, r"C:\Users\me\notes", r"D:\work", None, home),
///     r"~\notes"
/// );
/// ```
#[must_use]
pub fn pretty(
    policy: &PathPolicy,
    path: &str,
    cwd: &str,
    relative_to: Option<&str>,
    home: Option<&str>,
) -> String {
    let target = combine_normalized(policy, cwd, path);
    let base = combine_normalized(policy, cwd, relative_to.unwrap_or_default());

    let (target_prefix, target_parts) = components(policy, &target);
    let (base_prefix, base_parts) = components(policy, &base);

    if !target_prefix.matches(policy, &base_prefix) {
        if let Some(home) = home {
            let home = normalize(policy, home);
            let (home_prefix, home_parts) = components(policy, &home);
            let from_home = strip_prefix(policy, &target_parts, &home_parts);
            if from_home.len() != target_parts.len() && home_prefix.matches(policy, &target_prefix)
            {
                return under_home(policy, from_home);
            }
        }
        log::debug!("{target} is on another root than {base}");
        return normalize(policy, path);
    }

    let common = common_prefix_len(policy, &base_parts, &target_parts);
    let back = base_parts.len() - common;
    let relative_len = back + target_parts.len() - common;

    if relative_len + 1 > target_parts.len() {
        return target;
    }

    let steps: Vec<&str> = std::iter::repeat("..")
        .take(back)
        .chain(target_parts[common..].iter().copied())
        .collect();
    render(policy, "", &steps)
}

/// Relative path from `base` (default `.`) to `path`, both resolved
/// against `cwd`.
///
/// # Examples
///
/// ```
/// use shellpath::path::format::relative_from;
/// use shellpath::PathPolicy;
///
/// let posix = PathPolicy::POSIX;
/// assert_eq!(relative_from(&posix, "a/b", "/srv", None), "a/b");
/// assert_eq!(relative_from(&posix, "/srv/x", "/srv/y", Some("..")), "x");
/// ```
#[must_use]
pub fn relative_from(policy: &PathPolicy, path: &str, cwd: &str, base: Option<&str>) -> String {
    relative(
        policy,
        &combine(policy, cwd, path),
        &combine(policy, cwd, base.unwrap_or(".")),
    )
}

fn under_home(policy: &PathPolicy, rest: &[&str]) -> String {
    let sep = policy.separator();
    if rest.is_empty() {
        return format!("{HOME}{sep}");
    }

    let mut out = String::from(HOME);
    for part in rest {
        out.push(sep);
        out.push_str(part);
    }
    out
}
