use modula_analysis::error::LexicalErrorKind;
use modula_analysis::{analyze, Analyzer};
use modula_ast::labels::*;
use modula_tokens::prelude::*;
use test_log::test;

const MINIMAL: &str = "MODULE Test;\nVAR\n  a : INTEGER;\nBEGIN\n  a := 5;\nEND Test.";

const AVERAGE: &str = "\
MODULE Average;
VAR
  total : INTEGER;
  count : INTEGER;
  done : BOOLEAN;
BEGIN
  total := 0;
  count := 0;
  WHILE count < 10 DO
    total := total + count;
    count := count + 1;
  END;
  IF total > 40 THEN
    done := NOT done;
  END;
END Average.";

#[test]
fn test_minimal_program_symbols() {
    let report = analyze(MINIMAL);
    let rows = report.symbols();
    assert_eq!(rows.len(), 1);
    let a = &rows[0];
    assert_eq!(a.token, "00110");
    assert_eq!(a.name, "a");
    assert_eq!(a.ty, "INTEGER");
    assert_eq!(a.value, "5");
    assert_eq!(a.declaration_line, "3");
    assert_eq!(a.references, "3,5");
}

#[test]
fn test_minimal_program_tokens() {
    let report = analyze(MINIMAL);
    assert!(report.errors().is_empty());
    assert_eq!(
        report.token_lines(),
        vec![
            "00105 MODULE",
            "00110 Test",
            "00160 ;",
            "00205 VAR",
            "00210 a",
            "00155 :",
            "00305 INTEGER",
            "00260 ;",
            "00405 BEGIN",
            "00310 a",
            "00150 :=",
            "00115 5",
            "00360 ;",
            "00505 END",
            "00410 Test",
            "00165 .",
        ]
    );
}

#[test]
fn test_minimal_program_tree() {
    let report = analyze(MINIMAL);
    let tree = report.tree().expect("tree should be built without lexical errors");
    assert_eq!(tree.label(), PROGRAM);
    assert_eq!(tree.child_labels(), vec![MODULE, BLOCK]);

    let block = tree.child(BLOCK).unwrap();
    assert_eq!(block.child_labels(), vec![DECLARATIONS, BEGIN, STATEMENTS, END]);

    let declaration = block.child(DECLARATIONS).unwrap().child(DECLARATION).unwrap();
    assert_eq!(declaration.children()[1].label(), "a");

    let statement = block.child(STATEMENTS).unwrap().child(STATEMENT).unwrap();
    assert_eq!(statement.children()[1].label(), "a");
    // a bare value on the right hand side leaves the factor without children
    assert!(statement.child(FACTOR).unwrap().is_leaf());

    let end = block.child(END).unwrap();
    assert_eq!(end.child_labels(), vec![IDENTIFIER, "Test", DOT]);
}

#[test]
fn test_status_lines_on_success() {
    let report = analyze(MINIMAL);
    assert_eq!(
        report.status_lines(),
        vec![
            " Análisis léxico completado sin errores.".to_string(),
            "Líneas analizadas: 6".to_string()
        ]
    );
}

#[test]
fn test_unrecognized_symbol_blocks_tree() {
    let report = analyze("MODULE Main;\nBEGIN\n  a $ b;\nEND Main.");
    assert_eq!(report.errors().len(), 1);
    assert_eq!(report.errors()[0].kind(), LexicalErrorKind::Unrecognized);
    assert!(report.tree().is_none());
    assert_eq!(
        report.status_lines(),
        vec![
            "[Línea 3] Error léxico: Token no reconocido '$'".to_string(),
            " Árbol sintáctico no generado debido a errores léxicos.".to_string()
        ]
    );
}

#[test]
fn test_misspelled_reserved_word() {
    let report = analyze("MODULE Main;\nBEGINN\nEND Main.");
    assert_eq!(report.errors().len(), 1);
    let error = &report.errors()[0];
    assert_eq!(error.kind(), LexicalErrorKind::MisspelledReservedWord);
    assert_eq!(error.lexeme(), "BEGINN");
    assert_eq!(error.line(), 2);
    assert!(report.tree().is_none());
}

#[test]
fn test_larger_program() {
    let report = analyze(AVERAGE);
    assert!(report.is_clean(), "{:?}", report.errors());

    let rows = report.symbols();
    assert_eq!(
        rows.iter().map(|row| row.name.as_str()).collect::<Vec<_>>(),
        vec!["total", "count", "done"]
    );
    assert_eq!(rows[0].value, "total + count");
    assert_eq!(rows[0].references, "3,7,10,13");
    assert_eq!(rows[1].value, "count + 1");
    assert_eq!(rows[1].references, "4,8,9,10,11");
    assert_eq!(rows[2].value, "NOT done");
    assert_eq!(rows[2].references, "5,14");

    let tree = report.tree().unwrap();
    let statements = tree.find(STATEMENTS).unwrap();
    assert_eq!(
        statements.child_labels(),
        vec![STATEMENT, STATEMENT, WHILE_LOOP, IF_CONDITIONAL]
    );
    let while_loop = statements.child(WHILE_LOOP).unwrap();
    assert_eq!(while_loop.child_labels(), vec![CONDITION, STATEMENT, STATEMENT]);
    let conditional = statements.child(IF_CONDITIONAL).unwrap();
    let negation = conditional.child(STATEMENT).unwrap().child(FACTOR).unwrap();
    assert_eq!(negation.child_labels(), vec![OPERATOR, OPERAND]);
}

#[test]
fn test_references_are_ascending_and_unique() {
    let report = analyze(AVERAGE);
    for row in report.symbols() {
        let lines = row
            .references
            .split(',')
            .map(|line| line.parse::<usize>().expect("reference should be a line number"))
            .collect::<Vec<_>>();
        assert!(lines.windows(2).all(|pair| pair[0] < pair[1]), "{}", row.references);
    }
}

#[test]
fn test_sequence_numbers_increase_within_category() {
    let report = analyze(AVERAGE);
    for category in [Category::ReservedWord, Category::Identifier, Category::Separator] {
        let sequences = report
            .tokens()
            .iter()
            .filter(|record| record.category() == category)
            .map(|record| record.code().sequence())
            .collect::<Vec<_>>();
        assert!(!sequences.is_empty());
        assert!(sequences.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn test_runs_do_not_contaminate_each_other() {
    let mut analyzer = Analyzer::default();
    let first = analyzer.run(AVERAGE).token_lines();
    analyzer.run("x $;");
    assert!(!analyzer.report().is_clean());
    let second = analyzer.run(AVERAGE).token_lines();
    assert_eq!(first, second);
    assert!(analyzer.report().is_clean());
}

#[test]
fn test_clear_restores_unrun_state() {
    let mut analyzer = Analyzer::default();
    analyzer.run(MINIMAL);
    analyzer.clear();
    let report = analyzer.report();
    assert!(report.symbols().is_empty());
    assert!(report.tokens().is_empty());
    assert!(report.errors().is_empty());
    assert!(report.tree().is_none());
    assert!(report.status_lines().is_empty());
}

#[test]
fn test_reduced_reserved_words_classify_logical_operators() {
    let mut analyzer = Analyzer::builder()
        .reserved_words(ReservedWordSet::Reduced)
        .build()
        .expect("could not build analyzer");
    let report = analyzer.run("ok := a AND b;");
    assert!(report.token_lines().contains(&"00140 AND".to_string()));

    let report = analyze("ok := a AND b;");
    assert!(report.token_lines().contains(&"00105 AND".to_string()));
}

#[test]
fn test_repeat_for_program() {
    let source = "\
MODULE Loops;
VAR
  i : INTEGER;
  s : INTEGER;
BEGIN
  FOR i := 1 TO 10 DO
    s := s + i;
  END;
  REPEAT
    i := i - 1;
  UNTIL i = 0;
END Loops.";
    let report = analyze(source);
    assert!(report.is_clean(), "{:?}", report.errors());
    let statements = report.tree().unwrap().find(STATEMENTS).unwrap();
    assert_eq!(statements.child_labels(), vec![FOR_LOOP, REPEAT_LOOP]);
    let control = statements.child(FOR_LOOP).unwrap().child(CONTROL).unwrap();
    assert_eq!(control.children()[4].label(), "1");
    assert_eq!(control.children()[7].label(), "10");
    let repeat = statements.child(REPEAT_LOOP).unwrap();
    assert_eq!(repeat.child_labels(), vec![REPEAT, STATEMENT, UNTIL]);
}
