pub mod consts;
pub mod error;
pub mod expcomplex;
pub mod formula;
pub mod functions;
pub mod input;
pub mod prelude;
pub mod shell;
pub mod util;
