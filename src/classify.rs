// SPDX-License-Identifier: PMPL-1.0-or-later

//! Title → category classification

use crate::types::Category;

/// Keyword table, checked top to bottom; the first hit wins.
const RULES: &[(&[&str], Category)] = &[
    (&["password", "hash"], Category::Authentication),
    (&["net", "ip", "port"], Category::Networking),
    (&["perm", "writable", "suid"], Category::Permissions),
    (&["user", "group"], Category::UsersAndGroups),
    (&["process", "service"], Category::ProcessesAndServices),
    (&["docker", "container"], Category::Containers),
    (&["file", "dir"], Category::Filesystem),
];

pub fn classify(title: &str) -> Category {
    let title = title.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| title.contains(kw)))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Miscellaneous)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(classify("Users"), Category::UsersAndGroups);
        assert_eq!(classify("Net"), Category::Networking);
        assert_eq!(classify("Searching passwords in history"), Category::Authentication);
        assert_eq!(classify("SUID - Check easy privesc"), Category::Permissions);
        assert_eq!(classify("Running processes"), Category::ProcessesAndServices);
        assert_eq!(classify("Docker Container details"), Category::Containers);
        assert_eq!(classify("Interesting Files"), Category::Filesystem);
        assert_eq!(classify("Sudo version"), Category::Miscellaneous);
        assert_eq!(classify(""), Category::Miscellaneous);
    }

    #[test]
    fn test_first_match_wins() {
        // "ip" beats "user"
        assert_eq!(classify("User IPs"), Category::Networking);
        // "hash" beats "file"
        assert_eq!(classify("Hashes inside files"), Category::Authentication);
        // substring match: "description" contains "ip"
        assert_eq!(classify("Description"), Category::Networking);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("DOCKER"), Category::Containers);
        assert_eq!(classify("WrItAbLe"), Category::Permissions);
    }
}
