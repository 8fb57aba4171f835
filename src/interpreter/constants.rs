// Constants for the tape interpreter

/// Number of cells on the default tape
pub const DEFAULT_TAPE_CAPACITY: usize = 30_000;

pub const MOVE_RIGHT_CHAR: char = '>';
pub const MOVE_LEFT_CHAR: char = '<';
pub const INCREMENT_CHAR: char = '+';
pub const DECREMENT_CHAR: char = '-';
pub const OUTPUT_CHAR: char = '.';
pub const INPUT_CHAR: char = ',';

/// Opens a loop; its matching close is [`LOOP_EXIT_CHAR`]
pub const LOOP_ENTER_CHAR: char = '[';
pub const LOOP_EXIT_CHAR: char = ']';
