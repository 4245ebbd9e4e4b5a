/// Greeting used when no name (or an empty one) is given.
pub const DEFAULT_GREETING: &str = "Hello, World!";

/// Name greeted first, before the fixed list.
pub const DEFAULT_NAME: &str = "World";

/// Names greeted, in order, after the default greeting.
pub const GREETED_NAMES: [&str; 3] = ["Alice", "Bob", "Charlie"];
