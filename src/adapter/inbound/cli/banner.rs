//! ASCII art banner for the demo run.

use std::io::IsTerminal;

/// ANSI true-color escape sequences for the banner palette.
struct Colors {
    stack_dark: &'static str,
    stack_light: &'static str,
    title: &'static str,
    subtitle: &'static str,
    reset: &'static str,
}

const COLOR: Colors = Colors {
    stack_dark: "\x1b[38;2;73;110;139m",
    stack_light: "\x1b[38;2;120;165;190m",
    title: "\x1b[1;38;2;120;190;170m",
    subtitle: "\x1b[38;2;100;100;120m",
    reset: "\x1b[0m",
};

const PLAIN: Colors = Colors {
    stack_dark: "",
    stack_light: "",
    title: "",
    subtitle: "",
    reset: "",
};

/// Prints the unistore banner to stdout.
///
/// Renders ANSI true-color when stdout is a terminal and colors are not
/// disabled, plain text otherwise.
pub fn print_banner(color: bool) {
    let c = if color && std::io::stdout().is_terminal() {
        &COLOR
    } else {
        &PLAIN
    };

    let sd = c.stack_dark;
    let sl = c.stack_light;
    let tt = c.title;
    let st = c.subtitle;
    let r = c.reset;

    println!(
        r#"
{sl}   ▄▄▄▄▄▄▄▄▄{r}
{sd}  █▀▀▀▀▀▀▀▀▀█{r}      {tt}  __  ______  ______________  ____  ______{r}
{sl}  █▄▄▄▄▄▄▄▄▄█{r}      {tt} / / / / __ \/  _/ ___/_  __/ __ \/ __ \/ ____/{r}
{sd}  █▀▀▀▀▀▀▀▀▀█{r}      {tt}/ / / / / / // / \__ \ / / / / / / /_/ / __/{r}
{sl}  █▄▄▄▄▄▄▄▄▄█{r}      {tt}\ \_/ / / / // / ___/ // / / /_/ / _, _/ /___{r}
{sd}  █▀▀▀▀▀▀▀▀▀█{r}      {tt} \___/_/ /_/___//____//_/  \____/_/ |_/_____/{r}
{sl}   ▀▀▀▀▀▀▀▀▀{r}
                    {st}six stores, one insert/select/update/delete{r}
"#
    );
}
