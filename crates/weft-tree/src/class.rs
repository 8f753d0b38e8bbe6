//! Node classes and the payload kind each class carries.

/// Class tag of a tree node.
///
/// The class determines both the node's role in the program and the
/// shape of its payload (see [`Class::value_kind`]).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Class {
    /// Anonymous scope block.
    Nest,
    /// Named scope: couplet of (label, body).
    Section,
    /// Manifold declaration: couplet of (label, record).
    Manifold,
    /// Manifold record payload, the rhs of a `Manifold` couplet.
    Record,
    /// Type declaration: couplet of (name text, term group).
    TypeDecl,
    /// Bare-name selector.
    SelName,
    /// Qualified label selector.
    SelLabel,
    /// Dotted path selector: non-empty sequence of `SelLabel` nodes.
    SelPath,
    /// Selector list: sequence of alternative selectors.
    SelList,
    /// Function-name alias modifier.
    Alias,
    /// Target-language modifier.
    Lang,
    /// Cache directive modifier.
    Cache,
    /// Documentation modifier.
    Doc,
    /// Pre-execution check modifier.
    Check,
    /// Failure handler modifier.
    Fail,
    /// Argument modifier.
    Arg,
    /// Indexed hook modifier. The index is 0..=9.
    Hook(u8),
    /// Argument binding: couplet of (name text, value).
    Binding,
    /// Plain text payload.
    Text,
    /// Plain sequence payload.
    Group,
}

/// Payload shape carried by a node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValueKind {
    Text,
    Label,
    Seq,
    Couplet,
    Manifold,
}

impl Class {
    /// The payload kind a node of this class carries. Total over `Class`.
    pub fn value_kind(self) -> ValueKind {
        match self {
            Class::Nest | Class::SelPath | Class::SelList | Class::Group => ValueKind::Seq,
            Class::Section
            | Class::Manifold
            | Class::TypeDecl
            | Class::Alias
            | Class::Lang
            | Class::Cache
            | Class::Doc
            | Class::Check
            | Class::Fail
            | Class::Arg
            | Class::Hook(_)
            | Class::Binding => ValueKind::Couplet,
            Class::Record => ValueKind::Manifold,
            Class::SelName | Class::Text => ValueKind::Text,
            Class::SelLabel => ValueKind::Label,
        }
    }

    /// Whether this class is a modifier declaration.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            Class::Alias
                | Class::Lang
                | Class::Cache
                | Class::Doc
                | Class::Check
                | Class::Fail
                | Class::Arg
                | Class::Hook(_)
        )
    }

    /// Whether this class is a selector shape.
    pub fn is_selector(self) -> bool {
        matches!(
            self,
            Class::SelName | Class::SelLabel | Class::SelPath | Class::SelList
        )
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Class::Nest => write!(f, "nest"),
            Class::Section => write!(f, "section"),
            Class::Manifold => write!(f, "manifold"),
            Class::Record => write!(f, "record"),
            Class::TypeDecl => write!(f, "type"),
            Class::SelName => write!(f, "name"),
            Class::SelLabel => write!(f, "label"),
            Class::SelPath => write!(f, "path"),
            Class::SelList => write!(f, "list"),
            Class::Alias => write!(f, "alias"),
            Class::Lang => write!(f, "lang"),
            Class::Cache => write!(f, "cache"),
            Class::Doc => write!(f, "doc"),
            Class::Check => write!(f, "check"),
            Class::Fail => write!(f, "fail"),
            Class::Arg => write!(f, "arg"),
            Class::Hook(i) => write!(f, "hook{i}"),
            Class::Binding => write!(f, "binding"),
            Class::Text => write!(f, "text"),
            Class::Group => write!(f, "group"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_classes() {
        assert!(Class::Alias.is_modifier());
        assert!(Class::Arg.is_modifier());
        for i in 0..10 {
            assert!(Class::Hook(i).is_modifier());
        }
        assert!(!Class::Manifold.is_modifier());
        assert!(!Class::TypeDecl.is_modifier());
        assert!(!Class::SelPath.is_modifier());
    }

    #[test]
    fn selector_classes() {
        assert!(Class::SelName.is_selector());
        assert!(Class::SelPath.is_selector());
        assert!(!Class::Group.is_selector());
        assert!(!Class::Lang.is_selector());
    }

    #[test]
    fn value_kinds() {
        assert_eq!(Class::Nest.value_kind(), ValueKind::Seq);
        assert_eq!(Class::Manifold.value_kind(), ValueKind::Couplet);
        assert_eq!(Class::Hook(3).value_kind(), ValueKind::Couplet);
        assert_eq!(Class::Record.value_kind(), ValueKind::Manifold);
        assert_eq!(Class::SelLabel.value_kind(), ValueKind::Label);
        assert_eq!(Class::Text.value_kind(), ValueKind::Text);
    }

    #[test]
    fn display_names() {
        assert_eq!(Class::Hook(7).to_string(), "hook7");
        assert_eq!(Class::TypeDecl.to_string(), "type");
        assert_eq!(Class::SelPath.to_string(), "path");
    }
}
