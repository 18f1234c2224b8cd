//! Display implementations for domain models.
//!
//! This module contains the Display trait implementations for the core domain
//! models, kept apart from the model definitions. Everything renders as
//! markdown for the terminal renderer.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Constraint, DepartureSuggestion, FavoriteRoute, Itinerary, ModeSavings, RestStopPlan, RouteLeg,
    RouteMode, RoutePlan, Task, Totals, TravelMode, Warning,
};

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Deadline {
                task,
                arrival,
                closing,
            } => write!(
                f,
                "You may reach '{task}' at {arrival}, but it closes at {closing}!"
            ),
            Warning::DeliveryMode => {
                write!(f, "Delivery mode: stops ordered by proximity, constraints ignored")
            }
            Warning::EconomyMode => write!(f, "Economy mode: avoiding tolls and highways"),
            Warning::FastMode => write!(f, "Fast mode: optimizing for travel time"),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}**", self.name)?;
        if self.constraint != Constraint::None {
            write!(f, " [{}]", self.constraint)?;
        }
        if let Some(closing) = self.closing_time {
            write!(f, " (closes {closing})")?;
        }
        if let Some(address) = &self.address {
            write!(f, " - {address}")?;
        } else if self.location().is_none() {
            write!(f, " - location unresolved")?;
        }
        Ok(())
    }
}

impl fmt::Display for RouteLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**{}** at {} ({}, {})",
            self.task_label, self.arrival_time, self.duration, self.distance
        )?;
        if let Some(address) = &self.address {
            write!(f, " - {address}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.warnings.is_empty() {
            for warning in &self.warnings {
                writeln!(f, "> {warning}")?;
            }
            writeln!(f)?;
        }

        for (index, leg) in self.task_legs().iter().enumerate() {
            writeln!(f, "{}. {leg}", index + 1)?;
        }
        if let Some(leg) = self.return_leg() {
            writeln!(f)?;
            writeln!(f, "Back at the start at {} ({}, {})", leg.arrival_time, leg.duration, leg.distance)?;
        }

        Ok(())
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.duration_label(), self.distance_label())
    }
}

impl fmt::Display for RestStopPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.needs_rest {
            return writeln!(
                f,
                "No breaks needed ({} min of driving).",
                self.total_driving_minutes
            );
        }

        for stop in &self.suggestions {
            writeln!(
                f,
                "- Take a break after **{}** ({} min driven)",
                stop.after_stop, stop.driven_minutes
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for DepartureSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepartureSuggestion::AnyTime => write!(f, "No closing times, leave whenever you like."),
            DepartureSuggestion::LeaveBy {
                depart_by,
                earliest_closing,
            } => write!(
                f,
                "Leave by {depart_by} (first place closes at {earliest_closing})."
            ),
        }
    }
}

impl fmt::Display for ModeSavings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeSavings::Economy {
                toll_savings,
                fuel_saved_liters,
                fuel_cost_saved,
            } => {
                writeln!(f, "- **Tolls**: R$ {toll_savings:.2}")?;
                writeln!(f, "- **Fuel**: {fuel_saved_liters:.1} L (~R$ {fuel_cost_saved:.2})")?;
                writeln!(f, "- **Estimated total**: R$ {:.2}", self.total_cost_saved())
            }
            ModeSavings::Fast { minutes_saved } => {
                writeln!(f, "- About {minutes_saved} minutes faster than an economy route")
            }
        }
    }
}

impl fmt::Display for RoutePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Route")?;
        writeln!(f)?;
        write!(f, "{}", self.itinerary)?;
        writeln!(f)?;
        writeln!(f, "- **Total**: {}", self.totals)?;

        if let Some(savings) = &self.savings {
            writeln!(f, "\n## Savings")?;
            writeln!(f)?;
            write!(f, "{savings}")?;
        }

        if let Some(rest) = &self.rest_stops {
            writeln!(f, "\n## Rest stops")?;
            writeln!(f)?;
            write!(f, "{rest}")?;
        }

        if let Some(departure) = &self.departure {
            writeln!(f, "\n## Departure")?;
            writeln!(f)?;
            writeln!(f, "{departure}")?;
        }

        if let Some(favorite) = &self.favorite_match {
            writeln!(f)?;
            writeln!(
                f,
                "Looks like your favorite route **{}** ({:.0}% of these errands, used {} times).",
                favorite.name,
                favorite.overlap * 100.0,
                favorite.usage_count
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for FavoriteRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- **Errands**: {}", self.task_names.join(", "))?;
        writeln!(f, "- **Used**: {} times", self.usage_count)?;
        writeln!(f, "- **Saved**: {}", LocalDateTime(&self.created_at))?;
        if let Some(last_used) = &self.last_used {
            writeln!(f, "- **Last used**: {}", LocalDateTime(last_used))?;
        }
        writeln!(f)
    }
}
