use crate::errors::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

/// Strips a trailing `\r\n` or `\n`.
pub(crate) fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = match line.last() {
        Some(b'\n') => &line[..line.len() - 1],
        _ => line,
    };

    match line.last() {
        Some(b'\r') => &line[..line.len() - 1],
        _ => line,
    }
}

/// Splits an in-memory request into lines without their endings. A final
/// fragment with no line ending is still returned as a line.
pub(crate) fn split_lines(buf: &[u8]) -> Vec<&[u8]> {
    let mut lines: Vec<&[u8]> = buf.split(|b| *b == b'\n').map(trim_line_ending).collect();

    if buf.is_empty() || buf.ends_with(b"\n") {
        lines.pop();
    }

    lines
}

/// Reads one line of at most `max_line_length` bytes (ending excluded).
/// Returns `None` once the stream is exhausted.
pub(crate) async fn read_line<R>(
    reader: &mut R,
    max_line_length: usize,
) -> Result<Option<Vec<u8>>, Error>
where
    R: AsyncBufRead + Unpin,
{
    // room for the CRLF
    let limit = max_line_length as u64 + 2;
    let mut line = Vec::new();
    let mut limited = (&mut *reader).take(limit);
    let read = limited.read_until(b'\n', &mut line).await?;

    if read == 0 {
        return Ok(None);
    }

    if !line.ends_with(b"\n") && read as u64 == limit {
        return Err(Error::MalformedRequest);
    }

    let len = trim_line_ending(&line).len();
    if len > max_line_length {
        return Err(Error::MalformedRequest);
    }

    line.truncate(len);
    Ok(Some(line))
}
