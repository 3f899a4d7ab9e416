//! Compiled grammar steps
//!
//! A compiled grammar is an ordered `Vec<Procedure>`. Group procedures own
//! their body, so the tree is acyclic and as deep as the grammar nests.

/// One step of a compiled grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Procedure {
    /// Consume one input line and bind its space-separated values to `names`.
    Fields { names: Vec<String> },
    /// Run `body` as many times as the value bound to `count_var`, collecting
    /// each run's state into a list under `key`.
    Group {
        key: String,
        count_var: String,
        body: Vec<Procedure>,
    },
}

impl Procedure {
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Procedure::Fields {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn group(key: impl Into<String>, count_var: impl Into<String>, body: Vec<Procedure>) -> Self {
        Procedure::Group {
            key: key.into(),
            count_var: count_var.into(),
            body,
        }
    }

    /// Nesting depth: 1 for a fields step, 1 + the deepest body step for a group.
    pub fn depth(&self) -> usize {
        match self {
            Procedure::Fields { .. } => 1,
            Procedure::Group { body, .. } => 1 + tree_depth(body),
        }
    }

    /// Grammar lines this procedure was compiled from, open and close lines included.
    pub fn line_count(&self) -> usize {
        match self {
            Procedure::Fields { .. } => 1,
            Procedure::Group { body, .. } => 2 + body.iter().map(Procedure::line_count).sum::<usize>(),
        }
    }

    fn label(&self) -> String {
        match self {
            Procedure::Fields { names } => names.join(" "),
            Procedure::Group { key, count_var, .. } => format!("{key} × {count_var}"),
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Procedure::Fields { .. } => "↵",
            Procedure::Group { .. } => "☰",
        }
    }
}

/// Depth of the deepest procedure in `procedures` (0 when empty).
pub fn tree_depth(procedures: &[Procedure]) -> usize {
    procedures.iter().map(Procedure::depth).max().unwrap_or(0)
}

/// Render a compiled grammar one procedure per line, children indented
/// under their group.
///
/// ```text
/// ⧉ grammar
/// ├─ ↵ count
/// └─ ☰ records × count
///   └─ ↵ id name
/// ```
pub fn grammar_treeviz(procedures: &[Procedure]) -> String {
    let mut output = String::from("⧉ grammar\n");
    format_children(procedures, "", &mut output);
    output
}

fn format_children(procedures: &[Procedure], prefix: &str, output: &mut String) {
    let count = procedures.len();
    for (i, procedure) in procedures.iter().enumerate() {
        let is_last = i == count - 1;
        let connector = if is_last { "└─" } else { "├─" };
        output.push_str(&format!(
            "{}{} {} {}\n",
            prefix,
            connector,
            procedure.icon(),
            procedure.label()
        ));

        if let Procedure::Group { body, .. } = procedure {
            let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
            format_children(body, &child_prefix, output);
        }
    }
}
