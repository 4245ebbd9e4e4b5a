use log::{debug, trace};
use std::io::{self, BufWriter, Write};

use crate::defs::*;
use crate::greet::greet;

/// Writes the default greeting followed by one greeting per name in
/// [`GREETED_NAMES`], one per line.
pub fn output_greetings<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", greet(Some(DEFAULT_NAME)))?;

    for &name in GREETED_NAMES.iter() {
        trace!("Greeting {}", name);
        writeln!(writer, "{}", greet(Some(name)))?;
    }

    Ok(())
}

pub fn output_stdout() -> io::Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    output_greetings(&mut writer)?;
    writer.flush()?;
    debug!("Wrote {} greetings", GREETED_NAMES.len() + 1);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_output_greetings() {
        let mut buf = Vec::new();
        output_greetings(&mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Hello, World!\nHello, Alice!\nHello, Bob!\nHello, Charlie!\n"
        );
    }

    #[test]
    fn test_output_greetings_line_count() {
        let mut buf = Vec::new();
        output_greetings(&mut buf).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.lines().count(), 4);
        assert!(output.lines().all(|line| line.starts_with("Hello, ")));
    }

    #[test]
    fn test_output_greetings_write_error() {
        let err = output_greetings(&mut BrokenPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
