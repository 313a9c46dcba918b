//! ASCII tree rendering of exported subtrees.

use crate::export::TreeNode;

/// Renders a subtree as an indented ASCII tree, one node per line.
///
/// ```text
/// pen
/// ├── clip
/// └── cartridge
///     ├── tip
///     └── body
/// ```
#[must_use]
pub fn render(tree: &TreeNode) -> String {
    let mut out = String::new();
    out.push_str(&tree.id);
    out.push('\n');
    render_children(&tree.children, "", &mut out);
    out
}

fn render_children(children: &[TreeNode], prefix: &str, out: &mut String) {
    for (index, child) in children.iter().enumerate() {
        let last = index == children.len() - 1;
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(&child.id);
        out.push('\n');

        let child_prefix = if last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };
        render_children(&child.children, &child_prefix, out);
    }
}
