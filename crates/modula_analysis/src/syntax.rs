//! Builds the syntax tree one line at a time.
//!
//! Structural keywords at the start of a line open and close blocks on an explicit stack, and
//! statements are attached to whichever block is innermost. There is no grammar here, only
//! pattern matching and a little cross-line state.

use crate::syntax::arena::{NodeArena, NodeId};
use crate::syntax::transitions::{LineKind, StackEffect};
use modula_ast::labels::*;
use modula_ast::TreeNode;
use tracing::{debug, trace, trace_span, warn};

mod arena;
mod nodes;
pub mod transitions;

/// Builds the syntax tree for the given lines
pub fn build_tree<'a>(lines: impl IntoIterator<Item = &'a str>) -> TreeNode {
    let span = trace_span!("syntax_tree");
    let _enter = span.enter();

    let mut builder = TreeBuilder::new();
    for line in lines {
        builder.line(line);
    }
    let tree = builder.finish();
    debug!(nodes = tree.size(), "syntax tree built");
    tree
}

/// Cross-line state of the tree builder
#[derive(Debug)]
struct TreeBuilder {
    arena: NodeArena,
    root: NodeId,
    block: NodeId,
    declarations: NodeId,
    statements: NodeId,
    in_declarations: bool,
    in_statements: bool,
    open_blocks: Vec<NodeId>,
}

impl TreeBuilder {
    fn new() -> Self {
        let mut arena = NodeArena::default();
        let root = arena.open(PROGRAM);
        let block = arena.open(BLOCK);
        let declarations = arena.open(DECLARATIONS);
        let statements = arena.open(STATEMENTS);
        Self {
            arena,
            root,
            block,
            declarations,
            statements,
            in_declarations: false,
            in_statements: false,
            open_blocks: vec![statements],
        }
    }

    /// The innermost open block.
    ///
    /// `UNTIL` pops unconditionally and can empty the stack, after which statements fall back
    /// to the top level statement list.
    fn innermost(&self) -> NodeId {
        match self.open_blocks.last() {
            Some(top) => *top,
            None => {
                warn!("no open block, attaching to the top level statements");
                self.statements
            }
        }
    }

    fn pop_guarded(&mut self) {
        if self.open_blocks.len() > 1 {
            self.open_blocks.pop();
        }
    }

    fn line(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }
        let Some(kind) = LineKind::classify(line, self.in_declarations, self.in_statements) else {
            trace!(line, "ignored by tree builder");
            return;
        };
        trace!(line, ?kind, depth = self.open_blocks.len());

        match kind.stack_effect() {
            StackEffect::Section => self.section(kind, line),
            StackEffect::Attach => {
                let top = self.innermost();
                self.arena.attach(top, nodes::statement(line));
            }
            StackEffect::Open => {
                let node = self.open_node(kind, line);
                let top = self.innermost();
                self.arena.attach_open(top, node);
                self.open_blocks.push(node);
            }
            StackEffect::Reopen => {
                self.pop_guarded();
                let node = self.arena.open(ELSE);
                let top = self.innermost();
                self.arena.attach_open(top, node);
                self.open_blocks.push(node);
            }
            StackEffect::Close => {
                self.pop_guarded();
                self.arena.attach(self.block, nodes::end(line));
            }
            StackEffect::AttachThenPop => {
                let top = self.innermost();
                self.arena.attach(top, nodes::until(line));
                self.open_blocks.pop();
            }
        }
    }

    fn section(&mut self, kind: LineKind, line: &str) {
        match kind {
            LineKind::Module => {
                self.arena.attach(self.root, nodes::module(line));
                self.arena.attach_open(self.root, self.block);
            }
            LineKind::Var => {
                self.in_declarations = true;
                self.arena.attach(self.declarations, TreeNode::new(VAR));
            }
            LineKind::Declaration => {
                self.arena.attach(self.declarations, nodes::declaration(line));
            }
            LineKind::Begin => {
                self.in_declarations = false;
                self.in_statements = true;
                self.arena.attach_open(self.block, self.declarations);
                self.arena.attach(self.block, TreeNode::new(BEGIN));
                self.arena.attach_open(self.block, self.statements);
            }
            other => unreachable!("{other:?} does not fill a section"),
        }
    }

    /// Creates the node a block opening line pushes onto the stack
    fn open_node(&mut self, kind: LineKind, line: &str) -> NodeId {
        match kind {
            LineKind::If => self
                .arena
                .open_with(IF_CONDITIONAL, [nodes::condition(line, &["IF", "THEN"])]),
            LineKind::Then => self.arena.open(THEN),
            LineKind::While => self
                .arena
                .open_with(WHILE_LOOP, [nodes::condition(line, &["WHILE", "DO"])]),
            LineKind::Do => self.arena.open(DO),
            LineKind::Repeat => self
                .arena
                .open_with(REPEAT_LOOP, [TreeNode::new(REPEAT)]),
            LineKind::For => self
                .arena
                .open_with(FOR_LOOP, [nodes::for_control(line)]),
            other => unreachable!("{other:?} does not open a block"),
        }
    }

    fn finish(self) -> TreeNode {
        self.arena.finish(self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn tree_of(source: &str) -> TreeNode {
        build_tree(source.split('\n'))
    }

    fn statements(tree: &TreeNode) -> &TreeNode {
        tree.find(STATEMENTS).expect("statements should be attached")
    }

    #[test]
    fn test_minimal_program() {
        let tree = tree_of("MODULE Test;\nVAR\n  a : INTEGER;\nBEGIN\n  a := 5;\nEND Test.");
        assert_eq!(tree.label(), PROGRAM);
        assert_eq!(tree.child_labels(), vec![MODULE, BLOCK]);
        let block = tree.child(BLOCK).unwrap();
        assert_eq!(block.child_labels(), vec![DECLARATIONS, BEGIN, STATEMENTS, END]);
        let declarations = block.child(DECLARATIONS).unwrap();
        assert_eq!(declarations.child_labels(), vec![VAR, DECLARATION]);
        assert_eq!(statements(&tree).child_labels(), vec![STATEMENT]);
    }

    #[test]
    fn test_if_then_else_nesting() {
        let tree = tree_of(
            "MODULE M;\nBEGIN\nIF a > b\nTHEN\nm := a;\nELSE\nm := b;\nEND;\nEND M.",
        );
        let statements = statements(&tree);
        assert_eq!(statements.child_labels(), vec![IF_CONDITIONAL]);
        let conditional = statements.child(IF_CONDITIONAL).unwrap();
        assert_eq!(conditional.child_labels(), vec![CONDITION, THEN, ELSE]);
        assert_eq!(conditional.child(THEN).unwrap().child_labels(), vec![STATEMENT]);
        assert_eq!(conditional.child(ELSE).unwrap().child_labels(), vec![STATEMENT]);
        let block = tree.child(BLOCK).unwrap();
        assert_eq!(block.children_labeled(END).count(), 2);
    }

    #[test]
    fn test_end_pops_only_when_nested() {
        let tree = tree_of("MODULE E;\nBEGIN\nEND;\nEND;\nx := 1;");
        assert_eq!(statements(&tree).child_labels(), vec![STATEMENT]);
    }

    #[test]
    fn test_else_without_enclosing_block_keeps_statements_open() {
        let tree = tree_of("MODULE E;\nBEGIN\nELSE\nx := 1;\nEND;\ny := 2;");
        let statements = statements(&tree);
        // END pops the ELSE block, so `y` lands back in the top level list
        assert_eq!(statements.child_labels(), vec![ELSE, STATEMENT]);
        assert_eq!(statements.children()[1].children()[1].label(), "y");
        let otherwise = statements.child(ELSE).unwrap();
        assert_eq!(otherwise.child_labels(), vec![STATEMENT]);
        assert_eq!(otherwise.children()[0].children()[1].label(), "x");
    }

    #[test]
    fn test_do_on_its_own_line_opens_a_block() {
        let tree = tree_of("MODULE W;\nBEGIN\nWHILE a < b\nDO\nx := 1;\nEND;\nEND W.");
        let statements = statements(&tree);
        assert_eq!(statements.child_labels(), vec![WHILE_LOOP]);
        let while_loop = statements.child(WHILE_LOOP).unwrap();
        assert_eq!(while_loop.child_labels(), vec![CONDITION, DO]);
        let body = while_loop.child(DO).unwrap();
        assert_eq!(body.child_labels(), vec![STATEMENT]);
        assert_eq!(body.children()[0].children()[1].label(), "x");
    }

    #[test]
    fn test_repeat_until_closes_the_loop() {
        let tree = tree_of("MODULE R;\nBEGIN\nREPEAT\ni := i + 1;\nUNTIL i > 10;\nj := 0;\nEND R.");
        let statements = statements(&tree);
        assert_eq!(statements.child_labels(), vec![REPEAT_LOOP, STATEMENT]);
        let repeat = statements.child(REPEAT_LOOP).unwrap();
        assert_eq!(repeat.child_labels(), vec![REPEAT, STATEMENT, UNTIL]);
        let until = repeat.child(UNTIL).unwrap();
        assert_eq!(until.child(CONDITION).unwrap().children().len(), 3);
    }

    #[test]
    fn test_until_pops_unconditionally() {
        let tree = tree_of("MODULE U;\nBEGIN\nUNTIL x = 1;\ny := 2;\nEND U.");
        let statements = statements(&tree);
        assert_eq!(statements.child_labels(), vec![UNTIL, STATEMENT]);
    }

    #[test]
    fn test_while_do() {
        let tree = tree_of("MODULE W;\nBEGIN\nWHILE i < 10 DO\ni := i + 1;\nEND;\nEND W.");
        let statements = statements(&tree);
        let while_loop = statements.child(WHILE_LOOP).unwrap();
        assert_eq!(while_loop.child_labels(), vec![CONDITION, STATEMENT]);
    }

    #[test]
    fn test_for_loop_body() {
        let tree = tree_of("MODULE F;\nBEGIN\nFOR i := 1 TO 10 DO\ns := s + i;\nEND;\nEND F.");
        let for_loop = statements(&tree).child(FOR_LOOP).unwrap();
        assert_eq!(for_loop.child_labels(), vec![CONTROL, STATEMENT]);
    }

    #[test]
    fn test_without_module_block_is_detached() {
        let tree = tree_of("VAR\na : INTEGER;\nBEGIN\na := 1;");
        assert!(tree.is_leaf());
    }

    #[test]
    fn test_declarations_stop_at_begin() {
        let tree = tree_of("MODULE D;\nVAR\na : INTEGER;\nBEGIN\nb : INTEGER;\nEND D.");
        let declarations = tree.find(DECLARATIONS).unwrap();
        assert_eq!(declarations.children_labeled(DECLARATION).count(), 1);
    }

    #[test]
    fn test_unrecognized_lines_are_ignored() {
        let tree = tree_of("MODULE I;\nBEGIN\nWriteLn;\nEND I.");
        assert!(statements(&tree).is_leaf());
    }
}
