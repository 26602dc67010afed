// Copyright 2025 the ttf_surface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opens a font, renders one line per text encoding and render mode onto a
//! white screen, and writes the screen to `_output/ttf_demo.png`.
//!
//! Usage: `ttf_demo [FONT] [POINT_SIZE]`. Without arguments the font used by
//! the test suite is rendered.

use std::path::PathBuf;
use std::process::ExitCode;

use peniko::Color;
use ttf_surface::{
    Font, FontStyle, Library, RenderMode, RenderOptions, RenderStatus, Surface, Text, close_font,
};

const SCREEN_WIDTH: u32 = 640;
const SCREEN_HEIGHT: u32 = 480;

fn main() -> ExitCode {
    let mut args = std::env::args_os().skip(1);
    let font_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(ttf_surface_dev::test_font);
    let size = args
        .next()
        .and_then(|arg| arg.to_str()?.parse().ok())
        .unwrap_or(32);

    let library = Library::initialized();

    // The application keeps one "current" font and closes it on every exit path.
    let mut current: Option<Font<'_>> = match library.open_font(&font_path, size, None) {
        Ok(font) => Some(font),
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let Some(font) = current.as_mut() else {
        return ExitCode::FAILURE;
    };
    println!(
        "{} {} at {size}pt: ascent {}, descent {}, height {}, line skip {}",
        font.family_name().unwrap_or("<unnamed>"),
        font.style_name().unwrap_or(""),
        font.ascent(),
        font.descent(),
        font.height(),
        font.line_skip(),
    );

    let mut screen = Surface::new(SCREEN_WIDTH, SCREEN_HEIGHT).unwrap();
    screen.fill(Color::WHITE);

    let foreground = Color::from_rgba8(0x20, 0x20, 0x60, 0xff);
    let background = Color::from_rgba8(0xff, 0xe0, 0x90, 0xff);
    let utf16: Vec<u16> = "Text Unicode - Blended".encode_utf16().collect();
    let lines = [
        (Text::Latin1(b"Text Latin1 - Solid"), RenderMode::Solid),
        (
            Text::Utf8("Text UTF8 - Shaded"),
            RenderMode::Shaded { background },
        ),
        (Text::Utf8("Text UTF8 - Blended"), RenderMode::Blended),
        (Text::Unicode(&utf16), RenderMode::Blended),
        (Text::Glyph('@'), RenderMode::Blended),
    ];

    let mut y = 10;
    for (text, mode) in lines {
        let options = RenderOptions::new(mode).with_color(foreground);
        match font.render_text(text, 10, y, &options, &mut screen) {
            Some(RenderStatus::Rendered { width, height }) => {
                println!("{mode:?}: {width}x{height}");
            }
            Some(RenderStatus::Unsupported) => println!("{mode:?}: skipped UTF-16 text"),
            None => println!("{mode:?}: nothing rendered"),
        }
        y += font.line_skip();
    }

    let options = RenderOptions::new(RenderMode::Blended)
        .with_color(foreground)
        .with_style(FontStyle::BOLD | FontStyle::ITALIC | FontStyle::UNDERLINE);
    font.render_text(Text::Utf8("Bold Italic Underline"), 10, y, &options, &mut screen);
    y += font.line_skip();

    let options = RenderOptions::new(RenderMode::Blended)
        .with_color(foreground)
        .with_style(FontStyle::NORMAL);
    let samples = ttf_surface_dev::TextSamples::new();
    font.render_text(Text::Utf8(samples.latin.text.trim()), 10, y, &options, &mut screen);

    close_font(&mut current);

    let output_dir = ttf_surface_dev::output_dir();
    if let Err(err) = std::fs::create_dir_all(&output_dir) {
        eprintln!("couldn't create {}: {err}", output_dir.display());
        return ExitCode::FAILURE;
    }
    let output_path = output_dir.join("ttf_demo.png");
    if let Err(err) = screen.save_png(&output_path) {
        eprintln!("couldn't write {}: {err}", output_path.display());
        return ExitCode::FAILURE;
    }
    println!("wrote {}", output_path.display());
    ExitCode::SUCCESS
}
