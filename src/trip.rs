//! Form rules for creating and updating trips, inviting guests, confirming
//! attendance and adding links, plus the payloads sent to the trip API.

use serde::{Deserialize, Serialize};

use crate::consts::MIN_DESTINATION_LEN;
use crate::{
    CalendarDay, CivilDate, DateRange, Locale, MarkedDateMap, MarkingStyle, TripId,
    build_marked_dates_with, format_range_label, is_valid_email, is_valid_url, select_day,
};

/// A form rule the user's input broke. Messages are suitable for display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripError {
    #[error("Fill in all the trip information to proceed.")]
    MissingDetails,

    #[error("The destination must be at least {} characters long.", MIN_DESTINATION_LEN)]
    DestinationTooShort,

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Email has already been added: {0}")]
    DuplicateEmail(String),

    #[error("Fill in your name and email to confirm the trip.")]
    MissingGuestDetails,

    #[error("Provide a title for the link.")]
    MissingLinkTitle,

    #[error("Invalid link: {0}")]
    InvalidUrl(String),
}

/// Which half of the new-trip flow is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripStep {
    /// Destination and dates
    #[default]
    Details,
    /// Guest invitations
    Guests,
}

/// Body of the create-trip request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTrip {
    pub destination:      String,
    pub starts_at:        CivilDate,
    pub ends_at:          CivilDate,
    pub emails_to_invite: Vec<String>,
}

/// Body of the update-trip request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTrip {
    pub id:          TripId,
    pub destination: String,
    pub starts_at:   CivilDate,
    pub ends_at:     CivilDate,
}

/// Body of the confirm-attendance request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmAttendance {
    pub participant_id: String,
    pub name:           String,
    pub email:          String,
}

/// Body of the create-link request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTripLink {
    pub trip_id: TripId,
    pub title:   String,
    pub url:     String,
}

/// Requires a non-blank destination and both dates. Returns the trimmed
/// destination and the range boundaries.
fn required_details(destination: &str, dates: &DateRange) -> Result<(String, CivilDate, CivilDate), TripError> {
    let destination = destination.trim();
    let Some((start, end)) = dates.bounds() else {
        tracing::warn!("trip details incomplete: dates not selected");
        return Err(TripError::MissingDetails);
    };
    if destination.is_empty() {
        tracing::warn!("trip details incomplete: destination blank");
        return Err(TripError::MissingDetails);
    }
    Ok((destination.to_owned(), start.date(), end.date()))
}

/// New-trip rules: the required details plus a minimum destination length.
fn checked_details(destination: &str, dates: &DateRange) -> Result<(String, CivilDate, CivilDate), TripError> {
    let details = required_details(destination, dates)?;
    if details.0.chars().count() < MIN_DESTINATION_LEN {
        tracing::warn!(destination = %details.0, "destination too short");
        return Err(TripError::DestinationTooShort);
    }
    Ok(details)
}

/// Emails invited to a new trip, lower-cased and without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuestList {
    emails: Vec<String>,
}

impl GuestList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a guest after normalizing to trimmed lower case.
    ///
    /// # Errors
    /// `InvalidEmail` if the address is malformed, `DuplicateEmail` if it is
    /// already on the list.
    pub fn add(&mut self, email: &str) -> Result<(), TripError> {
        let email = email.trim().to_lowercase();
        if !is_valid_email(&email) {
            tracing::warn!(email = %email, "rejected guest email");
            return Err(TripError::InvalidEmail(email));
        }
        if self.emails.contains(&email) {
            return Err(TripError::DuplicateEmail(email));
        }
        self.emails.push(email);
        Ok(())
    }

    /// Removes a guest, matching the same way `add` normalizes. Returns
    /// whether it was present.
    pub fn remove(&mut self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        let before = self.emails.len();
        self.emails.retain(|e| *e != email);
        self.emails.len() != before
    }

    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    /// "2 guest(s) invited", or empty when nobody is invited
    pub fn summary(&self) -> String {
        if self.emails.is_empty() {
            String::new()
        } else {
            format!("{} guest(s) invited", self.emails.len())
        }
    }
}

/// The two-step new-trip form.
#[derive(Debug, Clone, Default)]
pub struct TripForm {
    pub destination: String,
    dates:           DateRange,
    pub guests:      GuestList,
    step:            TripStep,
}

impl TripForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn step(&self) -> TripStep {
        self.step
    }

    pub const fn dates(&self) -> &DateRange {
        &self.dates
    }

    /// Applies a calendar tap. Dates are locked once the form reaches the
    /// guests step; returns whether the tap was applied.
    pub fn select_day(&mut self, tapped: CalendarDay) -> bool {
        if self.step != TripStep::Details {
            return false;
        }
        self.dates = select_day(&self.dates, tapped);
        true
    }

    pub fn date_label(&self, locale: Locale) -> String {
        format_range_label(&self.dates, locale)
    }

    pub fn marked_dates(&self, style: &MarkingStyle) -> MarkedDateMap {
        build_marked_dates_with(&self.dates, style)
    }

    /// # Errors
    /// `MissingDetails` if the destination is blank or the dates are not both
    /// picked; `DestinationTooShort` for destinations under four characters.
    pub fn validate(&self) -> Result<(), TripError> {
        checked_details(&self.destination, &self.dates).map(|_| ())
    }

    /// Moves the flow forward.
    ///
    /// From the details step this moves to the guests step and returns
    /// `None`. From the guests step it returns the request to submit.
    ///
    /// # Errors
    /// Any `validate` error; the step is left unchanged.
    pub fn advance(&mut self) -> Result<Option<NewTrip>, TripError> {
        let (destination, starts_at, ends_at) = checked_details(&self.destination, &self.dates)?;
        match self.step {
            TripStep::Details => {
                self.step = TripStep::Guests;
                Ok(None)
            },
            TripStep::Guests => {
                tracing::debug!(%destination, %starts_at, %ends_at, guests = self.guests.len(), "trip ready");
                Ok(Some(NewTrip {
                    destination,
                    starts_at,
                    ends_at,
                    emails_to_invite: self.guests.emails().to_vec(),
                }))
            },
        }
    }

    /// Goes back to edit destination and dates
    pub fn back_to_details(&mut self) {
        self.step = TripStep::Details;
    }
}

impl UpdateTrip {
    /// Updates only need a destination and both dates; the new-trip minimum
    /// length does not apply.
    ///
    /// # Errors
    /// `MissingDetails` for a blank destination or an incomplete range.
    pub fn new(id: TripId, destination: &str, dates: &DateRange) -> Result<Self, TripError> {
        let (destination, starts_at, ends_at) = required_details(destination, dates)?;
        Ok(Self {
            id,
            destination,
            starts_at,
            ends_at,
        })
    }
}

/// A guest confirming an invitation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttendanceForm {
    pub name:  String,
    pub email: String,
}

impl AttendanceForm {
    /// # Errors
    /// `MissingGuestDetails` for a blank name or email, `InvalidEmail` for a
    /// malformed email.
    pub fn confirm(&self, participant_id: &str) -> Result<ConfirmAttendance, TripError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(TripError::MissingGuestDetails);
        }
        if !is_valid_email(email) {
            tracing::warn!(email, "rejected attendance email");
            return Err(TripError::InvalidEmail(email.to_owned()));
        }
        Ok(ConfirmAttendance {
            participant_id: participant_id.to_owned(),
            name:           name.to_owned(),
            email:          email.to_owned(),
        })
    }
}

/// A link being added to a trip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TripLinkForm {
    pub title: String,
    pub url:   String,
}

impl TripLinkForm {
    /// # Errors
    /// `MissingLinkTitle` for a blank title, `InvalidUrl` for anything that is
    /// not an http(s) URL.
    pub fn submit(&self, trip_id: &TripId) -> Result<NewTripLink, TripError> {
        let title = self.title.trim();
        let url = self.url.trim();
        if title.is_empty() {
            return Err(TripError::MissingLinkTitle);
        }
        if !is_valid_url(url) {
            tracing::warn!(url, "rejected trip link");
            return Err(TripError::InvalidUrl(url.to_owned()));
        }
        Ok(NewTripLink {
            trip_id: trip_id.clone(),
            title:   title.to_owned(),
            url:     url.to_owned(),
        })
    }

    /// Clears the fields after a successful submit
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
