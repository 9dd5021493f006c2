//! Labels used by structural nodes and markers

pub const PROGRAM: &str = "Program";
pub const BLOCK: &str = "Block";
pub const DECLARATIONS: &str = "Declarations";
pub const STATEMENTS: &str = "Statements";

pub const MODULE: &str = "MODULE";
pub const VAR: &str = "VAR";
pub const BEGIN: &str = "BEGIN";
pub const END: &str = "END";
pub const THEN: &str = "THEN";
pub const ELSE: &str = "ELSE";
pub const DO: &str = "DO";
pub const REPEAT: &str = "REPEAT";
pub const UNTIL: &str = "UNTIL";
pub const TO: &str = "TO";
pub const NOT: &str = "NOT";

pub const DECLARATION: &str = "Declaration";
pub const STATEMENT: &str = "Statement";
pub const FACTOR: &str = "Factor";
pub const OPERAND: &str = "Operand";
pub const OPERATOR: &str = "Operator";
pub const CONDITION: &str = "Condition";
pub const IDENTIFIER: &str = "Identifier";
pub const TYPE: &str = "Type";

pub const IF_CONDITIONAL: &str = "IF conditional";
pub const WHILE_LOOP: &str = "WHILE loop";
pub const REPEAT_LOOP: &str = "REPEAT loop";
pub const FOR_LOOP: &str = "FOR loop";

pub const CONTROL: &str = "Control";
pub const VARIABLE: &str = "Variable";
pub const START: &str = "Inicio";
pub const FINISH: &str = "Fin";

pub const ASSIGN: &str = ":=";
pub const COLON: &str = ":";
pub const SEMICOLON: &str = ";";
pub const DOT: &str = ".";
