//! Menu flows for the interactive shell.
//!
//! Every flow prompts for its fields one line at a time, trims each line, and
//! aborts with a message on the first invalid value instead of re-prompting.

use crate::domain::{EmailAddress, PersonName, PhoneNumber};
use crate::error::{BookError, BookResult, StoreError};
use crate::models::{parse_birth_date, Contact};
use crate::services::ContactBook;
use std::io::{self, BufRead, Write};

const MENU: &str = "\nChoose an option:\n\
                    1. Add Contact\n\
                    2. List Contacts\n\
                    3. Find Contact\n\
                    4. Update Phone\n\
                    5. Update Email\n\
                    6. Delete Contact\n\
                    7. Exit";

/// Outcome messages for one mutating flow.
struct Messages<'m> {
    success: &'m str,
    invalid: &'m str,
    not_found: &'m str,
}

/// Text-menu front end over a [`ContactBook`].
///
/// Generic over its input and output so it can run against stdin/stdout or
/// in-memory buffers.
pub struct Shell<'a, R, W> {
    book: &'a mut ContactBook,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(book: &'a mut ContactBook, input: R, output: W) -> Self {
        Self {
            book,
            input,
            output,
        }
    }

    /// Show the banner and serve menu choices until Exit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "===================================")?;
        writeln!(self.output, "  Welcome to Contact Book!")?;
        writeln!(self.output, "===================================")?;

        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };
            tracing::trace!(choice = %choice, "Menu choice");

            match choice.as_str() {
                "1" => self.add_contact()?,
                "2" => self.list_contacts()?,
                "3" => self.find_contact()?,
                "4" => self.update_phone()?,
                "5" => self.update_email()?,
                "6" => self.delete_contact()?,
                "7" => break,
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        writeln!(self.output, "Exiting Contact Book. Goodbye!")?;
        self.output.flush()
    }

    /// Print `label` and read one trimmed line. `None` means end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, so a garbled line fails
    /// validation like any other bad answer.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    fn prompt_name(&mut self) -> io::Result<Option<(String, String)>> {
        let Some(first_name) = self.prompt("Enter First Name: ")? else {
            return Ok(None);
        };
        let Some(last_name) = self.prompt("Enter Last Name: ")? else {
            return Ok(None);
        };
        Ok(Some((first_name, last_name)))
    }

    fn confirm(&mut self, label: &str) -> io::Result<bool> {
        let answer = self.prompt(label)?.unwrap_or_default();
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    fn add_contact(&mut self) -> io::Result<()> {
        let Some(first_name) = self.prompt("Enter First Name: ")? else {
            return Ok(());
        };
        let Ok(first_name) = PersonName::new(first_name) else {
            writeln!(
                self.output,
                "Invalid first name. Please use only letters and do not leave it empty."
            )?;
            return Ok(());
        };

        let Some(last_name) = self.prompt("Enter Last Name: ")? else {
            return Ok(());
        };
        let Ok(last_name) = PersonName::new(last_name) else {
            writeln!(
                self.output,
                "Invalid last name. Please use only letters and do not leave it empty."
            )?;
            return Ok(());
        };

        let mut contact = Contact::new(first_name, last_name);

        let Some(phone) = self.prompt("Enter Phone Number (leave blank if none): ")? else {
            return Ok(());
        };
        if !phone.is_empty() {
            match PhoneNumber::new(phone) {
                Ok(phone) => contact = contact.with_phone(phone),
                Err(_) => {
                    writeln!(self.output, "Invalid phone number format.")?;
                    return Ok(());
                }
            }
        }

        let Some(email) = self.prompt("Enter Email: ")? else {
            return Ok(());
        };
        match EmailAddress::new(email) {
            Ok(email) => contact = contact.with_email(email),
            Err(_) => {
                writeln!(self.output, "Invalid email format.")?;
                return Ok(());
            }
        }

        let Some(birth_date) = self.prompt("Enter Birthdate (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let birth_date = parse_birth_date(&birth_date);
        if birth_date.is_none() {
            writeln!(
                self.output,
                "Invalid birthdate format. Recording birthdate as unknown."
            )?;
        }
        contact = contact.with_birth_date(birth_date);

        match self.book.add(contact) {
            Ok(()) => writeln!(self.output, "Contact added successfully!"),
            Err(e) => writeln!(self.output, "Contact added, but saving failed: {}", e),
        }
    }

    fn list_contacts(&mut self) -> io::Result<()> {
        if self.book.list().is_empty() {
            if self.confirm("No contacts found. Would you like to add one? (y/n): ")? {
                self.add_contact()?;
            }
            return Ok(());
        }

        writeln!(self.output, "\nContacts:")?;
        for contact in self.book.list() {
            writeln!(self.output, "{}", contact)?;
        }
        Ok(())
    }

    fn find_contact(&mut self) -> io::Result<()> {
        let Some((first_name, last_name)) = self.prompt_name()? else {
            return Ok(());
        };

        match self.book.get(&first_name, &last_name) {
            Some(contact) => writeln!(self.output, "{}", contact),
            None => writeln!(self.output, "Contact not found."),
        }
    }

    fn update_phone(&mut self) -> io::Result<()> {
        let Some((first_name, last_name)) = self.prompt_name()? else {
            return Ok(());
        };
        let Some(new_phone) = self.prompt("Enter New Phone Number: ")? else {
            return Ok(());
        };

        let result = self.book.update_phone(&first_name, &last_name, &new_phone);
        self.report(
            result,
            Messages {
                success: "Phone number updated successfully!",
                invalid: "Invalid phone number format. Update failed.",
                not_found: "Contact not found. Update failed.",
            },
        )
    }

    fn update_email(&mut self) -> io::Result<()> {
        let Some((first_name, last_name)) = self.prompt_name()? else {
            return Ok(());
        };
        let Some(new_email) = self.prompt("Enter New Email: ")? else {
            return Ok(());
        };

        let result = self.book.update_email(&first_name, &last_name, &new_email);
        self.report(
            result,
            Messages {
                success: "Email updated successfully!",
                invalid: "Invalid email format. Update failed.",
                not_found: "Contact not found. Update failed.",
            },
        )
    }

    fn delete_contact(&mut self) -> io::Result<()> {
        let Some((first_name, last_name)) = self.prompt_name()? else {
            return Ok(());
        };

        let question = format!(
            "Are you sure you want to delete {} {}? (y/n): ",
            first_name, last_name
        );
        if !self.confirm(&question)? {
            return writeln!(self.output, "Deletion canceled.");
        }

        let result = self.book.delete(&first_name, &last_name).map(|_| ());
        self.report(
            result,
            Messages {
                success: "Contact deleted successfully!",
                invalid: "Deletion failed.",
                not_found: "Contact not found. Deletion failed.",
            },
        )
    }

    fn report(&mut self, result: BookResult<()>, messages: Messages<'_>) -> io::Result<()> {
        match result {
            Ok(()) => writeln!(self.output, "{}", messages.success),
            Err(BookError::Store(StoreError::NotFound { .. })) => {
                writeln!(self.output, "{}", messages.not_found)
            }
            Err(BookError::Store(StoreError::Invalid(_))) => {
                writeln!(self.output, "{}", messages.invalid)
            }
            Err(BookError::Storage(e)) => writeln!(
                self.output,
                "{} (warning: saving failed: {})",
                messages.success, e
            ),
        }
    }
}
