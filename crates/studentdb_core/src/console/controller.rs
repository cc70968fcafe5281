//! Menu state machine and per-action flows.

use crate::console::input::Prompter;
use crate::console::{ConsoleError, ConsoleResult};
use crate::model::person::{Person, ValidationResult};
use crate::model::student::Student;
use crate::repo::student_repo::StudentRepository;
use crate::service::student_service::StudentService;
use log::{debug, info};
use std::io::{BufRead, Write};

pub const BANNER: &str = "===== Student Database Management System =====";

const MENU_LINES: &[&str] = &[
    "1) Add new student",
    "2) View all student records",
    "3) Update existing record",
    "4) Delete record",
    "5) View a student by ID",
    "0) Exit",
];

/// Menu actions, keyed by the number the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ViewAll,
    Update,
    Delete,
    ViewOne,
    Exit,
}

impl MenuChoice {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Add),
            2 => Some(Self::ViewAll),
            3 => Some(Self::Update),
            4 => Some(Self::Delete),
            5 => Some(Self::ViewOne),
            0 => Some(Self::Exit),
            _ => None,
        }
    }

    /// Parses a raw menu answer; anything but a known number is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<i32>().ok().and_then(Self::from_code)
    }
}

/// Console controller owning the prompt channel and the student service.
pub struct Console<R, W, S: StudentRepository> {
    io: Prompter<R, W>,
    service: StudentService<S>,
}

impl<R: BufRead, W: Write, S: StudentRepository> Console<R, W, S> {
    pub fn new(reader: R, writer: W, service: StudentService<S>) -> Self {
        Self {
            io: Prompter::new(reader, writer),
            service,
        }
    }

    pub fn service(&self) -> &StudentService<S> {
        &self.service
    }

    /// Consumes the console, returning the service and the output sink.
    pub fn into_parts(self) -> (StudentService<S>, W) {
        (self.service, self.io.into_writer())
    }

    /// Runs the menu loop until exit or end of input.
    ///
    /// # Errors
    /// - Returns `ConsoleError::Io` when reading or writing fails.
    pub fn run(&mut self) -> ConsoleResult<()> {
        self.io.say(BANNER)?;
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(ConsoleError::InputClosed) => {
                    info!("event=console_exit module=console status=ok reason=input_closed");
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// One menu round. Returns `false` once the user chose exit.
    fn step(&mut self) -> ConsoleResult<bool> {
        self.print_menu()?;
        let answer = self.io.read_line("Enter choice: ")?;
        let Some(choice) = MenuChoice::parse(&answer) else {
            self.io.say("Invalid choice. Try again.")?;
            return Ok(true);
        };

        debug!("event=menu_choice module=console choice={choice:?}");
        match choice {
            MenuChoice::Add => self.add_flow()?,
            MenuChoice::ViewAll => self.view_all_flow()?,
            MenuChoice::Update => self.update_flow()?,
            MenuChoice::Delete => self.delete_flow()?,
            MenuChoice::ViewOne => self.view_one_flow()?,
            MenuChoice::Exit => {
                self.io.say("Bye!")?;
                info!("event=console_exit module=console status=ok reason=user");
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn print_menu(&mut self) -> ConsoleResult<()> {
        self.io.say("")?;
        for line in MENU_LINES {
            self.io.say(line)?;
        }
        Ok(())
    }

    fn add_flow(&mut self) -> ConsoleResult<()> {
        let id = self.io.read_int("ID: ")?;
        let name = self.io.read_line("Name: ")?;
        let course = self.io.read_line("Course: ")?;
        let marks = self.io.read_marks()?;

        let student = match Student::new(id, name, course, marks) {
            Ok(student) => student,
            Err(err) => return self.io.say(format!("Error: {err}")),
        };
        let summary = student.to_string();
        if self.service.add_student(student) {
            self.io.say(format!("Added: {summary}"))
        } else {
            self.io.say("A student with this ID already exists.")
        }
    }

    fn view_all_flow(&mut self) -> ConsoleResult<()> {
        let students = self.service.list_students();
        if students.is_empty() {
            return self.io.say("No records found.");
        }

        self.io.say("-- All Students --")?;
        for student in &students {
            self.io.say(student.display_details())?;
            self.io.say("")?;
        }
        Ok(())
    }

    fn update_flow(&mut self) -> ConsoleResult<()> {
        let id = self.io.read_int("Enter ID to update: ")?;
        let Some(mut draft) = self.service.get_student(id) else {
            return self.io.say(format!("No student with ID {id}"));
        };
        self.io.say(format!("Editing: {draft}"))?;

        // Edits land on a snapshot; nothing is committed unless every field
        // validated.
        if let Err(err) = self.edit_student(&mut draft)? {
            return self.io.say(format!("Error: {err}"));
        }

        let summary = draft.to_string();
        if self.service.update_student(id, draft) {
            self.io.say(format!("Updated: {summary}"))
        } else {
            self.io.say(format!("No student with ID {id}"))
        }
    }

    /// Collects optional replacements for name, course and marks.
    ///
    /// The outer result carries I/O failures, the inner one validation.
    fn edit_student(&mut self, draft: &mut Student) -> ConsoleResult<ValidationResult<()>> {
        let name = self.io.read_line("New name (leave blank to keep): ")?;
        if !name.trim().is_empty() {
            if let Err(err) = draft.set_name(&name) {
                return Ok(Err(err));
            }
        }

        let course = self.io.read_line("New course (leave blank to keep): ")?;
        if !course.trim().is_empty() {
            if let Err(err) = draft.set_course(&course) {
                return Ok(Err(err));
            }
        }

        let marks_choice = self.io.read_line("Update marks? (y/N): ")?;
        if marks_choice.trim().eq_ignore_ascii_case("y") {
            let marks = self.io.read_marks()?;
            if let Err(err) = draft.set_marks(marks) {
                return Ok(Err(err));
            }
        }
        Ok(Ok(()))
    }

    fn delete_flow(&mut self) -> ConsoleResult<()> {
        let id = self.io.read_int("Enter ID to delete: ")?;
        if self.service.delete_student(id) {
            self.io.say(format!("Deleted student with ID {id}"))
        } else {
            self.io.say(format!("No student with ID {id}"))
        }
    }

    fn view_one_flow(&mut self) -> ConsoleResult<()> {
        let id = self.io.read_int("Enter ID: ")?;
        match self.service.get_student(id) {
            Some(student) => self.io.say(student.display_details()),
            None => self.io.say(format!("No student with ID {id}")),
        }
    }
}
