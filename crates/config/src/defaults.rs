//! The compiled-in settings written to `.gitconfig`

use crate::identity::Identity;
use gitcfg_core::settings::{Section, SettingsTree};

/// Build the settings tree for `identity`
///
/// Only the `[user]` section depends on the identity; everything else is fixed.
/// `core.editor` is the literal `$EDITOR`, expanded by git at runtime.
pub fn default_settings(identity: &Identity) -> SettingsTree {
    let mut tree = SettingsTree::new();

    tree.insert(
        "user",
        Section::new()
            .value("name", identity.name.as_str())
            .value("email", identity.email.as_str())
            .value("username", identity.nick.as_str()),
    );
    tree.insert("init", Section::new().value("defaultBranch", "main"));
    tree.insert("pull", Section::new().value("rebase", true));
    tree.insert("fetch", Section::new().value("prune", true));
    tree.insert(
        "core",
        Section::new()
            .value("editor", "$EDITOR")
            .value(
                "whitespace",
                "fix,-indent-with-non-tab,trailing-space,cr-at-eol",
            )
            .value("quotepath", false),
    );
    tree.insert(
        "credential",
        Section::new().value("helper", "cache --timeout 1800"),
    );
    tree.insert(
        "color",
        Section::new()
            .value("ui", "auto")
            .value("diff", "auto")
            .value("status", "auto")
            .value("branch", "auto")
            .subsection(
                "status",
                [
                    ("added", "green"),
                    ("changed", "yellow"),
                    ("untracked", "red"),
                ],
            )
            .subsection(
                "branch",
                [("current", "green"), ("local", "yellow"), ("remote", "red")],
            )
            .subsection(
                "diff",
                [
                    ("meta", "yellow bold"),
                    ("frag", "magenta bold"),
                    ("old", "red bold"),
                    ("new", "green bold"),
                    ("whitespace", "red reverse"),
                ],
            ),
    );
    tree.insert("merge", Section::new().value("tool", "nvimdiff2"));
    tree.insert("diff", Section::new().value("tool", "nvimdiff"));

    tree
}
