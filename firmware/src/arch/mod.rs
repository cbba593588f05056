/// Architecture / board support.
///
/// Only compiled for the bare-metal target. Host builds (unit tests and the
/// hosted simulator) never touch these registers.
pub mod tm4c1294;
