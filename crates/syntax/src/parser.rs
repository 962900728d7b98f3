use crate::classify::{classify, LineMatch};
use crate::error::ParseError;
use crate::tree::{Entry, NodeId, NodeKind, SourceTree};
use sass_order_types::Position;

/// Parse indented Sass source into a [`SourceTree`].
///
/// Nesting is inferred from indentation only. Blank lines and lines starting
/// with `/` are skipped, lines no classifier recognizes are ignored, and
/// property lines outside any node are dropped.
///
/// The first indented line fixes the file's indentation unit; dedents are
/// measured in whole units (rounding down), so files mixing indent widths nest
/// unpredictably but deterministically.
///
/// # Errors
///
/// Returns [`ParseErrorKind::MalformedIndentation`](crate::ParseErrorKind) when
/// a line dedents past the top level, or when the first structural move of a
/// file is an indent with no node to descend into.
#[tracing::instrument(skip(source), fields(size = source.len()))]
pub fn parse(source: &str) -> Result<SourceTree, ParseError> {
    let mut builder = TreeBuilder::default();

    for (index, line) in source.lines().enumerate() {
        let text = line.trim();
        if text.is_empty() || text.starts_with('/') {
            continue;
        }

        builder.line(Position::new(index + 1, indentation_width(line)), text)?;
    }

    tracing::debug!(
        nodes = builder.tree.len(),
        indentation = builder.unit,
        "Parsed source"
    );
    Ok(builder.tree)
}

/// Width of the leading whitespace, in characters
fn indentation_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

#[derive(Default)]
struct TreeBuilder {
    tree: SourceTree,
    /// Indentation unit, fixed by the first indented line
    unit: Option<usize>,
    current_indentation: usize,
    /// Node whose body receives entries
    current: Option<NodeId>,
    /// Most recently created node; an indent descends into it
    pending: Option<NodeId>,
}

impl TreeBuilder {
    fn line(&mut self, position: Position, text: &str) -> Result<(), ParseError> {
        let width = position.column;
        if width != 0 && self.unit.is_none() {
            tracing::trace!(unit = width, line = position.line, "Indentation unit");
            self.unit = Some(width);
        }

        match width.cmp(&self.current_indentation) {
            std::cmp::Ordering::Less => self.dedent(position, text)?,
            std::cmp::Ordering::Greater => self.indent(position, text)?,
            std::cmp::Ordering::Equal => {}
        }
        self.current_indentation = width;

        for matched in classify(text) {
            self.apply(matched, position);
        }

        Ok(())
    }

    fn dedent(&mut self, position: Position, text: &str) -> Result<(), ParseError> {
        // Any nonzero indentation has already fixed the unit
        let unit = self.unit.unwrap_or(self.current_indentation);
        let steps = (self.current_indentation - position.column) / unit;
        tracing::trace!(steps, line = position.line, "Dedent");

        for _ in 0..steps {
            let node = self.current.ok_or_else(|| {
                ParseError::malformed_indentation(position, "dedent past the top level", text)
            })?;
            self.current = self.tree.node(node).parent;
        }

        Ok(())
    }

    fn indent(&mut self, position: Position, text: &str) -> Result<(), ParseError> {
        let node = self.pending.ok_or_else(|| {
            ParseError::malformed_indentation(position, "indented line has no enclosing node", text)
        })?;
        tracing::trace!(line = position.line, node = node.index(), "Indent");
        self.current = Some(node);

        Ok(())
    }

    /// Selector text that nested selectors start from (empty at top level)
    fn selector_prefix(&self) -> &str {
        self.current
            .map_or("", |id| self.tree.node(id).effective_selector())
    }

    fn apply(&mut self, matched: LineMatch<'_>, position: Position) {
        match matched {
            LineMatch::Selector { fragment } => {
                let name = format!("{}{fragment}", self.selector_prefix());
                self.open(NodeKind::Selector, name.clone(), name, position);
            }
            LineMatch::Function { name } => {
                let selector = self.selector_prefix().to_string();
                self.open(NodeKind::Function, name.to_string(), selector, position);
            }
            LineMatch::Placeholder { name } => {
                self.open(
                    NodeKind::PlaceholderSelector,
                    name.to_string(),
                    format!("%{name}"),
                    position,
                );
            }
            LineMatch::Mixin => self.add_entry(Entry::Mixin { position }),
            LineMatch::Property { name, value } => self.add_entry(Entry::Property {
                name: name.to_string(),
                value: value.to_string(),
                position,
            }),
        }
    }

    fn open(&mut self, kind: NodeKind, name: String, selector: String, position: Position) {
        let id = self.tree.push(kind, name, selector, position, self.current);
        self.pending = Some(id);
    }

    fn add_entry(&mut self, entry: Entry) {
        if let Some(current) = self.current {
            self.tree.push_entry(current, entry);
        } else {
            tracing::trace!(line = entry.position().line, "Dropping entry outside any node");
        }
    }
}
