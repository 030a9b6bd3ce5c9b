/// Domain layer for the dependency scan
///
/// Pure types and services with no knowledge of GitLab, Maven processes or
/// the report format. Everything here can be exercised without I/O, except
/// the tree parser which only reads from the `BufRead` it is given.
pub mod domain;
pub mod services;
