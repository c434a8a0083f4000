//! Installing a custom palette (runs in its own process)

use pretty_assertions::assert_eq;
use proven_console_logger::test_support::capture;
use proven_console_logger::*;

#[test]
fn test_install_custom_palette() {
    let palette = Palette::from_templates([
        "[E {}|{}|{}] {}",
        "[X {}|{}|{}] {}",
        "[W {}|{}|{}] {}",
        "[I {}|{}|{}] {{{}}}",
    ])
    .unwrap();
    palette::install(palette.clone()).unwrap();

    assert_eq!(palette::current(), &palette);
    assert!(matches!(
        palette::install(Palette::plain()),
        Err(Error::PaletteInstalled)
    ));

    let site = CallSite::new("a.rs", "m::f", 5);
    let (logger, captured) = capture(|| ActiveLogger::<level::Info>::new(site, format_args!("body")));
    assert_eq!(&*logger, "[I a.rs|m::f|5] {body}");
    assert_eq!(captured.stdout(), ["[I a.rs|m::f|5] {body}"]);

    let (logger, _) = capture(|| ActiveLogger::<level::Exception>::new(site, format_args!("{}", 1)));
    assert_eq!(&*logger, "[X a.rs|m::f|5] 1");
}

#[test]
fn test_rejects_bad_templates() {
    assert!(matches!(
        Palette::from_templates(["{}", "{}", "{}", "{}"]),
        Err(Error::Placeholders {
            expected: 4,
            found: 1
        })
    ));
    assert!(matches!(
        Palette::from_templates(["{}{}{}{}", "{}{}{}{", "{}{}{}{}", "{}{}{}{}"]),
        Err(Error::UnbalancedBrace { offset: 6 })
    ));
}
