//! Serializing a pixel grid as Easy6502 text.

use std::io::{self, Write};

use crate::palette::map_color;
use crate::pixmap::PixelGrid;

/// First screen memory address written in assembly mode.
pub const BASE_ADDR: u16 = 0x200;

/// Output serialization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Comma-separated `$xx` byte values, one image row per line.
    DataTable,
    /// An `LDA`/`STA` pair per pixel against successive screen addresses.
    Assembly,
}

/// Per-run emitter settings, fixed before the first byte is written.
#[derive(Debug, Clone, Copy)]
pub struct EmitConfig {
    pub mode: OutputMode,
    pub verbose: bool,
}

/// Walk `grid` in scan order and write each pixel's mapped byte to `out`.
///
/// When `config.verbose` is set, every fragment written to `out` is mirrored
/// to `echo`. Echo writes are best-effort; only failures on `out` abort
/// emission.
pub fn emit<W, E>(
    grid: &PixelGrid,
    config: &EmitConfig,
    out: &mut W,
    echo: &mut E,
) -> io::Result<()>
where
    W: Write,
    E: Write,
{
    // flat across the whole image, not reset per row
    let mut cursor = 0usize;

    for row in grid.rows() {
        for (x, &rgb) in row.iter().enumerate() {
            let byte = map_color(rgb);

            match config.mode {
                OutputMode::Assembly => {
                    put(out, echo, config.verbose, &format!("LDA #${byte:x}\n"))?;
                    put(
                        out,
                        echo,
                        config.verbose,
                        &format!("STA ${:x}\n", BASE_ADDR as usize + cursor),
                    )?;
                    cursor += 1;
                }
                OutputMode::DataTable => {
                    put(out, echo, config.verbose, &format!("${byte:02x}"))?;
                    if x + 1 < row.len() {
                        put(out, echo, config.verbose, ", ")?;
                    }
                }
            }
        }

        // unconditional row terminator; in assembly mode this produces the
        // blank line separating each row's instruction block
        put(out, echo, config.verbose, "\n")?;
    }

    Ok(())
}

fn put<W, E>(out: &mut W, echo: &mut E, verbose: bool, fragment: &str) -> io::Result<()>
where
    W: Write,
    E: Write,
{
    out.write_all(fragment.as_bytes())?;
    if verbose {
        let _ = echo.write_all(fragment.as_bytes());
    }

    Ok(())
}
