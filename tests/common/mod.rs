use minibasic::mach::{Event, Runtime};

/// Run a program to completion and collect everything printed. Errors are
/// collected the way the terminal driver shows them, as a `?<error>` line.
pub fn run(source: &str) -> String {
    run_with_input(source, &[])
}

/// Same, answering each INPUT request with the next line of `input` and
/// declaring end-of-input when the answers run out. Prompts are collected
/// into the output ahead of their answers.
pub fn run_with_input(source: &str, input: &[&str]) -> String {
    let mut runtime = match Runtime::from_source(source) {
        Ok(runtime) => runtime,
        Err(error) => return format!("?{}\n", error),
    };
    let mut answers = input.iter();
    let mut output = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(5000);
        match &event {
            Event::Stopped => break,
            Event::Errored(error) => {
                output.push_str(&format!("?{}\n", error));
                break;
            }
            Event::Running => {
                if prev_running {
                    output.push_str("\nEXECUTION CYCLES EXCEEDED\n");
                    break;
                }
            }
            Event::Print(text) => {
                output.push_str(text);
            }
            Event::Input(prompt) => {
                output.push_str(prompt);
                match answers.next() {
                    Some(line) => runtime.enter(line),
                    None => runtime.end_of_input(),
                }
            }
        }
        prev_running = matches!(event, Event::Running);
    }
    output
}
