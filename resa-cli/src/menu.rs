//! The interactive menu session.
//!
//! A [`MenuSession`] renders the fixed numbered menu, reads choices and
//! operation inputs from a line-oriented source, drives the store, and
//! translates store results into confirmation or error text. The session is
//! generic over its input and output so tests can drive it in-process.

use std::io::{self, BufRead, Write};

use resa::{ReservationId, ReservationStore};

use crate::input::{read_date, read_integer, read_line};

/// An interactive session over a reservation store.
pub struct MenuSession<R, W> {
    store: ReservationStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    /// Creates a session driving `store` with the given input and output.
    pub fn new(store: ReservationStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Runs the menu loop until the user chooses exit or input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = read_integer::<i64, _, _>(
                &mut self.input,
                &mut self.output,
                "Choose an option: ",
            )?
            else {
                return Ok(());
            };

            let outcome = match choice {
                1 => self.make_reservation()?,
                2 => {
                    self.view_all()?;
                    Some(())
                }
                3 => self.cancel_reservation()?,
                4 => self.update_reservation()?,
                5 => self.search_reservations()?,
                6 => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid choice, please try again.")?;
                    Some(())
                }
            };
            if outcome.is_none() {
                return Ok(());
            }

            writeln!(self.output)?;
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "1. Make a reservation")?;
        writeln!(self.output, "2. View all reservations")?;
        writeln!(self.output, "3. Cancel a reservation")?;
        writeln!(self.output, "4. Update a reservation")?;
        writeln!(self.output, "5. Search reservations")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    fn make_reservation(&mut self) -> io::Result<Option<()>> {
        let Some(name) = read_line(&mut self.input, &mut self.output, "Name: ")? else {
            return Ok(None);
        };
        let Some(date) = read_date(&mut self.input, &mut self.output, "Date (YYYY-MM-DD): ")?
        else {
            return Ok(None);
        };
        let Some(guests) =
            read_integer(&mut self.input, &mut self.output, "Number of guests: ")?
        else {
            return Ok(None);
        };

        let reservation = self.store.create(name, date, guests);
        writeln!(
            self.output,
            "Reservation made with ID {}",
            reservation.id()
        )?;
        Ok(Some(()))
    }

    fn view_all(&mut self) -> io::Result<()> {
        writeln!(self.output, "Reservations:")?;
        for reservation in self.store.list() {
            writeln!(self.output, "{reservation}")?;
        }
        Ok(())
    }

    fn cancel_reservation(&mut self) -> io::Result<Option<()>> {
        let Some(id) = self.read_id("Reservation ID to cancel: ")? else {
            return Ok(None);
        };
        let canceled = id.map_or(false, |id| self.store.cancel(id));
        if canceled {
            writeln!(self.output, "Reservation canceled")?;
        } else {
            writeln!(self.output, "Reservation not found")?;
        }
        Ok(Some(()))
    }

    fn update_reservation(&mut self) -> io::Result<Option<()>> {
        let Some(id) = self.read_id("Reservation ID to update: ")? else {
            return Ok(None);
        };
        let Some(name) = read_line(&mut self.input, &mut self.output, "New Name: ")? else {
            return Ok(None);
        };
        let Some(date) =
            read_date(&mut self.input, &mut self.output, "New Date (YYYY-MM-DD): ")?
        else {
            return Ok(None);
        };
        let Some(guests) =
            read_integer(&mut self.input, &mut self.output, "New Number of guests: ")?
        else {
            return Ok(None);
        };

        let updated = id.map_or(false, |id| self.store.update(id, name, date, guests));
        if updated {
            writeln!(self.output, "Reservation updated")?;
        } else {
            writeln!(self.output, "Reservation not found")?;
        }
        Ok(Some(()))
    }

    fn search_reservations(&mut self) -> io::Result<Option<()>> {
        let Some(query) = read_line(
            &mut self.input,
            &mut self.output,
            "Enter name or date to search: ",
        )?
        else {
            return Ok(None);
        };

        let results = self.store.search(&query);
        if results.is_empty() {
            writeln!(self.output, "No reservations found")?;
        } else {
            writeln!(self.output, "Search results:")?;
            for reservation in results {
                writeln!(self.output, "{reservation}")?;
            }
        }
        Ok(Some(()))
    }

    /// Reads an id, mapping input outside the id space to "not found".
    ///
    /// `Ok(Some(None))` means the user entered an integer that cannot name
    /// any reservation (negative, for instance); the caller reports not
    /// found, matching how an id-typed lookup would.
    fn read_id(&mut self, prompt: &str) -> io::Result<Option<Option<ReservationId>>> {
        let Some(raw) = read_integer::<i64, _, _>(&mut self.input, &mut self.output, prompt)?
        else {
            return Ok(None);
        };
        Ok(Some(u64::try_from(raw).ok().map(ReservationId::new)))
    }
}
