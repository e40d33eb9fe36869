//! Parsers for the two common word2vec serializations.
//!
//! Text format: an optional `vocab dim` header line, then one `word v1 .. vn`
//! line per entry. GloVe-style files skip the header; the dimension is then
//! inferred from the first row.
//!
//! C binary format: an ASCII `vocab dim\n` header, then for each entry the
//! word bytes up to a space followed by `dim` little-endian f32 values, with
//! optional newline separators between entries.

use crate::error::{Result, VectorModelError};

pub(crate) fn parse_text(input: &str) -> Result<Vec<(String, Vec<f32>)>> {
    let mut entries: Vec<(String, Vec<f32>)> = Vec::new();
    let mut declared: Option<(usize, usize)> = None;
    let mut dimension: Option<usize> = None;
    let mut seen_content = false;

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        // Only the first non-empty line can be a header.
        if !seen_content {
            seen_content = true;
            if let Some(header) = parse_header(line) {
                declared = Some(header);
                dimension = Some(header.1);
                continue;
            }
        }

        let mut tokens = line.split_whitespace();
        let word = tokens
            .next()
            .ok_or_else(|| VectorModelError::Parse {
                line: line_no,
                message: "missing word".to_string(),
            })?
            .to_string();

        let mut values = Vec::with_capacity(dimension.unwrap_or(0));
        for token in tokens {
            let value: f32 = token.parse().map_err(|e| VectorModelError::Parse {
                line: line_no,
                message: format!("invalid vector component '{token}': {e}"),
            })?;
            values.push(value);
        }

        if values.is_empty() {
            return Err(VectorModelError::Parse {
                line: line_no,
                message: format!("no vector components after word '{word}'"),
            });
        }

        match dimension {
            None => dimension = Some(values.len()),
            Some(expected) if expected != values.len() => {
                return Err(VectorModelError::Parse {
                    line: line_no,
                    message: format!(
                        "expected {expected} vector components, got {}",
                        values.len()
                    ),
                });
            }
            Some(_) => {}
        }

        entries.push((word, values));
    }

    if entries.is_empty() {
        return Err(VectorModelError::Empty);
    }

    if let Some((vocab, _)) = declared {
        if vocab != entries.len() {
            // Real-world files routinely under- or over-declare; trust the data.
            log::warn!(
                "Model header declares {vocab} entries but file contains {}",
                entries.len()
            );
        }
    }

    Ok(entries)
}

/// A header line is exactly two unsigned integers: `vocab dim`.
fn parse_header(line: &str) -> Option<(usize, usize)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return None;
    }
    let vocab = tokens[0].parse::<usize>().ok()?;
    let dim = tokens[1].parse::<usize>().ok()?;
    Some((vocab, dim))
}

pub(crate) fn parse_binary(bytes: &[u8]) -> Result<Vec<(String, Vec<f32>)>> {
    let newline = bytes
        .iter()
        .position(|&b| b == b'\n')
        .ok_or_else(|| VectorModelError::Binary("missing header line".to_string()))?;
    let header = std::str::from_utf8(&bytes[..newline])
        .map_err(|e| VectorModelError::Binary(format!("non-UTF-8 header: {e}")))?;
    let (vocab, dim) = parse_header(header).ok_or_else(|| {
        VectorModelError::Binary(format!("invalid header '{header}' (expected 'vocab dim')"))
    })?;
    if dim == 0 {
        return Err(VectorModelError::Binary(
            "header declares zero dimensions".to_string(),
        ));
    }

    let mut entries = Vec::with_capacity(vocab);
    let mut pos = newline + 1;
    for entry in 0..vocab {
        // Writers disagree on whether entries are newline-separated.
        while pos < bytes.len() && bytes[pos] == b'\n' {
            pos += 1;
        }

        let word_start = pos;
        while pos < bytes.len() && bytes[pos] != b' ' {
            pos += 1;
        }
        if pos >= bytes.len() {
            return Err(VectorModelError::Binary(format!(
                "unexpected end of file reading word of entry {entry}"
            )));
        }
        let word = std::str::from_utf8(&bytes[word_start..pos])
            .map_err(|e| {
                VectorModelError::Binary(format!("non-UTF-8 word in entry {entry}: {e}"))
            })?
            .to_string();
        pos += 1;

        let needed = dim * std::mem::size_of::<f32>();
        let end = pos + needed;
        if end > bytes.len() {
            return Err(VectorModelError::Binary(format!(
                "truncated vector for word '{word}' (entry {entry})"
            )));
        }
        let values: Vec<f32> = bytes[pos..end]
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        pos = end;

        entries.push((word, values));
    }

    if entries.is_empty() {
        return Err(VectorModelError::Empty);
    }

    Ok(entries)
}
