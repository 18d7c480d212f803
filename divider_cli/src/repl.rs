//! Interactive prompt over the headless calculator forms.
//!
//! Each line is one command. Calculation errors are printed and the session
//! keeps going; only I/O failures end it early.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use divider_core::{CalcResult, SolverSettings, ThreeResistorForm, TwoTerminalForm};

use crate::report;

const HELP: &str = "\
Commands:
  mode three|two        switch between the 3-resistor and 2-resistor forms
  set <field> [value]   fill a field; no value leaves it blank
  unit <field> <tag>    select Ω, kΩ or MΩ for a resistor
  calc                  calculate from the current fields
  clear                 empty every field and reset units to Ω
  show                  print the current fields
  help                  show this text
  quit                  leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Three,
    Two,
}

struct Session {
    mode: Mode,
    three: ThreeResistorForm,
    two: TwoTerminalForm,
    settings: SolverSettings,
    json: bool,
}

/// Run against the process stdin/stdout.
pub fn run(settings: &SolverSettings, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(stdin.lock(), &mut stdout, settings, json)
}

/// Run a session over arbitrary input and output streams.
pub fn run_session<R: BufRead, W: Write>(input: R, out: &mut W, settings: &SolverSettings, json: bool) -> Result<()> {
    let mut session = Session {
        mode: Mode::Two,
        three: ThreeResistorForm::default(),
        two: TwoTerminalForm::default(),
        settings: settings.clone(),
        json,
    };

    writeln!(out, "Voltage Divider Calculator - type 'help' for commands")?;
    write_prompt(out, session.mode)?;

    for line in input.lines() {
        let line = line?;
        if !session.handle(line.trim(), out)? {
            return Ok(());
        }
        write_prompt(out, session.mode)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_prompt<W: Write>(out: &mut W, mode: Mode) -> io::Result<()> {
    let name = match mode {
        Mode::Three => "three",
        Mode::Two => "two",
    };
    write!(out, "divider[{}]> ", name)?;
    out.flush()
}

impl Session {
    /// Execute one command; returns false when the session should end.
    fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "quit" | "exit" | "q" => return Ok(false),
            "help" | "?" => writeln!(out, "{}", HELP)?,
            "mode" => match rest {
                "three" | "3" => self.mode = Mode::Three,
                "two" | "2" => self.mode = Mode::Two,
                other => writeln!(out, "Unknown mode '{}': expected 'three' or 'two'", other)?,
            },
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let outcome = self.set_field(field, value.trim());
                self.report_result(out, outcome)?;
            }
            "unit" => {
                let (field, tag) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let outcome = self.set_unit(field, tag.trim());
                self.report_result(out, outcome)?;
            }
            "calc" | "calculate" => self.calculate(out)?,
            "clear" => match self.mode {
                Mode::Three => self.three.clear(),
                Mode::Two => self.two.clear(),
            },
            "show" => self.show(out)?,
            other => writeln!(out, "Unknown command '{}' - type 'help'", other)?,
        }
        Ok(true)
    }

    fn set_field(&mut self, field: &str, value: &str) -> CalcResult<()> {
        match self.mode {
            Mode::Three => self.three.set_field(field, value),
            Mode::Two => self.two.set_field(field, value),
        }
    }

    fn set_unit(&mut self, field: &str, tag: &str) -> CalcResult<()> {
        let policy = self.settings.unit_policy;
        match self.mode {
            Mode::Three => self.three.set_unit(field, tag, policy).map(drop),
            Mode::Two => self.two.set_unit(field, tag, policy).map(drop),
        }
    }

    fn report_result<W: Write>(&self, out: &mut W, outcome: CalcResult<()>) -> io::Result<()> {
        match outcome {
            Ok(()) => Ok(()),
            Err(err) => report::write_error(out, &err, self.json),
        }
    }

    fn calculate<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let outcome = match self.mode {
            Mode::Three => self.three.calculate(&self.settings).map(drop),
            Mode::Two => self.two.calculate(&self.settings).map(drop),
        };
        match outcome {
            Ok(()) => self.show(out),
            Err(err) => report::write_error(out, &err, self.json),
        }
    }

    fn show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.mode {
            Mode::Three => {
                let f = &self.three;
                writeln!(out, "Input Voltage (V):     {}", f.vin)?;
                writeln!(out, "R1:                    {} {}", f.r1, f.r1_unit)?;
                writeln!(out, "R2:                    {} {}", f.r2, f.r2_unit)?;
                writeln!(out, "R3:                    {} {}", f.r3, f.r3_unit)?;
                writeln!(out, "Voltage Across R1 (V): {}", f.v_r1)?;
                writeln!(out, "Voltage Across R2 (V): {}", f.v_r2)?;
                writeln!(out, "Voltage Across R3 (V): {}", f.v_r3)?;
            }
            Mode::Two => {
                let f = &self.two;
                writeln!(out, "Voltage Source (Vs):   {} V", f.vs)?;
                writeln!(out, "Resistance 1 (R1):     {} {}", f.r1, f.r1_unit)?;
                writeln!(out, "Resistance 2 (R2):     {} {}", f.r2, f.r2_unit)?;
                writeln!(out, "Output Voltage (Vout): {} V", f.vout)?;
            }
        }
        Ok(())
    }
}
