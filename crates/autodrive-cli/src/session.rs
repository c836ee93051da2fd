//! The interactive operator session.
//!
//! [`Session`] reads operator input line by line from any [`BufRead`] and
//! writes prompts and results to any [`Write`], so the whole dialogue can
//! be driven from a test with in-memory buffers. End of input ends the
//! session as if the operator had chosen to exit.

use std::io::{self, BufRead, Write};

use autodrive_engine::{Car, Field};
use tracing::{debug, info};

use crate::input::{self, InputError};

/// Where the operator wants to go after a menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    /// Create a fresh field and start again.
    Restart,
    /// Leave the program.
    Exit,
}

/// An interactive session over an input reader and an output writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    banner: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session that prints the welcome banner.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            banner: true,
        }
    }

    /// Enable or disable the welcome banner.
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Consume the session and return the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the operator exits or input ends.
    ///
    /// Only I/O failures are returned as errors; bad input is reported to
    /// the operator and asked for again.
    pub fn run(&mut self) -> io::Result<()> {
        if self.banner {
            writeln!(self.output, "Welcome to Auto Driving Car Simulation!\n")?;
        }
        loop {
            let Some(mut field) = self.create_field()? else {
                return self.goodbye();
            };
            match self.main_menu(&mut field)? {
                Flow::Restart => {
                    debug!("operator restarted the simulation");
                }
                Flow::Exit => return self.goodbye(),
            }
        }
    }

    fn goodbye(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\nThank you for running the simulation. Goodbye!"
        )?;
        self.output.flush()
    }

    /// Print `text` and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn report_error(&mut self, error: &dyn std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "Error: {error}")
    }

    fn create_field(&mut self) -> io::Result<Option<Field>> {
        loop {
            let Some(line) = self.prompt(
                "Please enter the width and height of the simulation field in x y format:",
            )?
            else {
                return Ok(None);
            };
            let parsed = input::parse_dimensions(&line)
                .and_then(|config| Field::new(config).map_err(InputError::from));
            match parsed {
                Ok(field) => {
                    let bounds = field.bounds();
                    info!(width = bounds.width(), height = bounds.height(), "field created");
                    writeln!(
                        self.output,
                        "\nYou have created a field of {} x {}.",
                        bounds.width(),
                        bounds.height()
                    )?;
                    return Ok(Some(field));
                }
                Err(e) => {
                    debug!(error = %e, "field input rejected");
                    self.report_error(&e)?;
                }
            }
        }
    }

    fn main_menu(&mut self, field: &mut Field) -> io::Result<Flow> {
        loop {
            let Some(choice) = self.prompt(
                "\nPlease choose from the following options:\n[1] Add a car to field\n[2] Run simulation",
            )?
            else {
                return Ok(Flow::Exit);
            };
            match choice.trim() {
                "1" => {
                    match self.add_car(field)? {
                        Some(Ok(())) => {}
                        Some(Err(e)) => {
                            debug!(error = %e, "car input rejected");
                            self.report_error(&e)?;
                        }
                        None => return Ok(Flow::Exit),
                    }
                    self.list_cars(field)?;
                }
                "2" => {
                    if field.is_empty() {
                        self.report_error(&"No cars added to the simulation")?;
                        continue;
                    }
                    self.list_cars(field)?;
                    let report = field.run();
                    writeln!(self.output, "\nAfter simulation, the result is:")?;
                    for line in report.lines() {
                        writeln!(self.output, "- {line}")?;
                    }
                    return self.after_run_menu();
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// Ask for one car. The outer `None` means input ended.
    fn add_car(&mut self, field: &mut Field) -> io::Result<Option<Result<(), InputError>>> {
        let Some(line) = self.prompt("\nPlease enter the name of the car:")? else {
            return Ok(None);
        };
        let name = match input::parse_name(&line) {
            Ok(name) => name,
            Err(e) => return Ok(Some(Err(e))),
        };

        let Some(line) = self.prompt(&format!(
            "Please enter initial position of car {name} in x y Direction format:"
        ))?
        else {
            return Ok(None);
        };
        let (position, heading) = match input::parse_placement(&line) {
            Ok(placement) => placement,
            Err(e) => return Ok(Some(Err(e))),
        };

        let Some(line) = self.prompt(&format!("Please enter the commands for car {name}:"))?
        else {
            return Ok(None);
        };
        let script = match input::parse_script(&line) {
            Ok(script) => script,
            Err(e) => return Ok(Some(Err(e))),
        };

        let car = Car::new(name, position, heading, script);
        Ok(Some(field.add_car(car).map_err(InputError::from)))
    }

    fn list_cars(&mut self, field: &Field) -> io::Result<()> {
        writeln!(self.output, "\nYour current list of cars are:")?;
        for car in field.cars() {
            writeln!(self.output, "- {car}, {}", car.script())?;
        }
        Ok(())
    }

    fn after_run_menu(&mut self) -> io::Result<Flow> {
        loop {
            let Some(choice) = self.prompt(
                "\nPlease choose from the following options:\n[1] Start over\n[2] Exit",
            )?
            else {
                return Ok(Flow::Exit);
            };
            match choice.trim() {
                "1" => return Ok(Flow::Restart),
                "2" => return Ok(Flow::Exit),
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn transcript(input: &str) -> String {
        let mut session =
            Session::new(Cursor::new(input.to_owned()), Vec::new()).with_banner(false);
        session.run().unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn end_of_input_says_goodbye() {
        let out = transcript("");
        assert!(out.ends_with("Thank you for running the simulation. Goodbye!\n"));
    }

    #[test]
    fn field_prompt_repeats_until_valid() {
        let out = transcript("0 5\nabc\n10 10\n");
        assert!(out.contains("Error: width must be a positive number, got 0"));
        assert!(out.contains("Error: expected input in 'x y' format, got 'abc'"));
        assert!(out.contains("You have created a field of 10 x 10."));
    }

    #[test]
    fn run_without_cars_is_an_error() {
        let out = transcript("10 10\n2\n");
        assert!(out.contains("Error: No cars added to the simulation"));
    }

    #[test]
    fn invalid_menu_choice() {
        let out = transcript("10 10\n7\n");
        assert!(out.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn bad_car_input_is_reported_and_list_shown() {
        let out = transcript("10 10\n1\nA\n1 2 Q\n");
        assert!(out.contains("Error: invalid direction: 'Q'. Must be one of N, S, E, W"));
        assert!(out.contains("Your current list of cars are:"));
    }

    #[test]
    fn full_run_then_exit() {
        let out = transcript("10 10\n1\nA\n1 2 N\nFFRFFFFRRL\n2\n2\n");
        assert!(out.contains("- A, (1,2) N, FFRFFFFRRL"));
        assert!(out.contains("After simulation, the result is:\n- A, (5,4) S\n"));
        assert!(out.ends_with("Thank you for running the simulation. Goodbye!\n"));
    }

    #[test]
    fn start_over_asks_for_a_new_field() {
        let out = transcript("10 10\n1\nA\n1 2 N\nF\n2\n1\n5 5\n");
        assert_eq!(out.matches("You have created a field of").count(), 2);
        assert!(out.contains("You have created a field of 5 x 5."));
    }
}
