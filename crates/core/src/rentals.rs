//! # Museum Rentals
//!
//! Any signed-in member may ask to rent the museum for an event. Staff see
//! every request; managers and admins confirm or cancel them.

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::models::{
    rental::{MuseumRental, NewMuseumRental, RentalRequest, RentalStatus},
    user::User,
};
use crate::store::RentalStore;

pub struct RentalService<'a> {
    rentals: &'a dyn RentalStore,
}

impl<'a> RentalService<'a> {
    pub fn new(rentals: &'a dyn RentalStore) -> Self {
        Self { rentals }
    }

    /// Records a Pending request on behalf of `requester`.
    pub async fn request_rental(
        &self,
        requester: &User,
        request: RentalRequest,
        today: NaiveDate,
    ) -> BookingResult<MuseumRental> {
        request.validate(today)?;

        let notes = request
            .notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty());

        let rental = self
            .rentals
            .create_rental(&NewMuseumRental {
                user_id: requester.id,
                user_name: requester.label().to_string(),
                email: requester.email.clone(),
                date: request.date,
                time: request.time,
                guests: request.guests,
                notes,
            })
            .await?;

        info!(rental_id = %rental.id, date = %rental.date, guests = rental.guests, "Museum rental requested");
        Ok(rental)
    }

    pub async fn list_rentals(&self, actor: &User) -> BookingResult<Vec<MuseumRental>> {
        if !actor.role.is_staff() {
            return Err(BookingError::Authorization(
                "Only staff can view rental requests".to_string(),
            ));
        }
        Ok(self.rentals.list_rentals().await?)
    }

    pub async fn set_status(
        &self,
        actor: &User,
        rental_id: Uuid,
        status: RentalStatus,
    ) -> BookingResult<MuseumRental> {
        if !actor.role.manages_roster() {
            return Err(BookingError::Authorization(
                "Only managers can approve rentals".to_string(),
            ));
        }

        let rental = self
            .rentals
            .get_rental(rental_id)
            .await?
            .ok_or_else(|| BookingError::NotFound(format!("Rental with ID {} not found", rental_id)))?;

        if !rental.status.can_transition_to(status) {
            return Err(BookingError::Validation(format!(
                "A {} rental cannot be marked {}",
                rental.status.as_str(),
                status.as_str()
            )));
        }

        let updated = self.rentals.update_rental_status(rental.id, status).await?;
        info!(rental_id = %updated.id, status = updated.status.as_str(), "Rental status changed");
        Ok(updated)
    }
}
