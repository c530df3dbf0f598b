//! Locale and label tables
//!
//! The tracker ships with English and Portuguese label sets. Every
//! user-visible string lives here so the screens stay a single
//! implementation parametrized by locale instead of per-language copies.

use serde::{Deserialize, Serialize};

use crate::models::TimeOfDay;

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pt,
}

/// Static label table for one locale
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub title: &'static str,
    pub financial_overview: &'static str,
    pub goals: &'static str,
    pub total_earnings: &'static str,
    pub gas_expenses: &'static str,
    pub last_mileage: &'static str,
    pub miles_unit: &'static str,
    pub daily_goal: &'static str,
    pub weekly_goal: &'static str,
    pub monthly_goal: &'static str,
    pub recent_trips: &'static str,
    pub no_trips_yet: &'static str,
    pub trip: &'static str,
    pub add_gas: &'static str,
    pub track_mileage: &'static str,
    pub add_trip: &'static str,
    pub gas_prompt: &'static str,
    pub mileage_prompt: &'static str,
    pub trip_prompt: &'static str,
    pub amount: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
    pub quit: &'static str,
    pub invalid_amount: &'static str,
    pub currency: &'static str,
    pub dawn: &'static str,
    pub morning: &'static str,
    pub afternoon: &'static str,
    pub night: &'static str,
}

const EN: Labels = Labels {
    title: "Uber Driver Finance Tracker",
    financial_overview: "Financial Overview",
    goals: "Goals",
    total_earnings: "Total Earnings",
    gas_expenses: "Gas Expenses",
    last_mileage: "Last Mileage",
    miles_unit: "miles",
    daily_goal: "Daily Goal",
    weekly_goal: "Weekly Goal",
    monthly_goal: "Monthly Goal",
    recent_trips: "Recent Trips",
    no_trips_yet: "No trips logged yet",
    trip: "Trip",
    add_gas: "Add Gas Payment",
    track_mileage: "Track Mileage",
    add_trip: "Add Trip",
    gas_prompt: "Gas payment amount",
    mileage_prompt: "Current mileage",
    trip_prompt: "Trip earnings",
    amount: "Amount",
    submit: "Submit",
    cancel: "Cancel",
    quit: "Quit",
    invalid_amount: "Enter a valid number",
    currency: "$",
    dawn: "Dawn",
    morning: "Morning",
    afternoon: "Afternoon",
    night: "Night",
};

const PT: Labels = Labels {
    title: "Controle Financeiro do Motorista",
    financial_overview: "Resumo Financeiro",
    goals: "Metas",
    total_earnings: "Ganhos Totais",
    gas_expenses: "Gastos com Combustível",
    last_mileage: "Última Quilometragem",
    miles_unit: "km",
    daily_goal: "Meta Diária",
    weekly_goal: "Meta Semanal",
    monthly_goal: "Meta Mensal",
    recent_trips: "Corridas Recentes",
    no_trips_yet: "Nenhuma corrida registrada",
    trip: "Corrida",
    add_gas: "Adicionar Combustível",
    track_mileage: "Registrar Quilometragem",
    add_trip: "Adicionar Corrida",
    gas_prompt: "Valor do combustível",
    mileage_prompt: "Quilometragem atual",
    trip_prompt: "Ganhos da corrida",
    amount: "Valor",
    submit: "Enviar",
    cancel: "Cancelar",
    quit: "Sair",
    invalid_amount: "Digite um número válido",
    currency: "R$",
    dawn: "Madrugada",
    morning: "Manhã",
    afternoon: "Tarde",
    night: "Noite",
};

impl Locale {
    /// Label table for this locale
    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Pt => &PT,
        }
    }
}

impl Labels {
    /// Display name for a time-of-day bucket
    pub fn time_of_day(&self, tod: TimeOfDay) -> &'static str {
        match tod {
            TimeOfDay::Dawn => self.dawn,
            TimeOfDay::Morning => self.morning,
            TimeOfDay::Afternoon => self.afternoon,
            TimeOfDay::Night => self.night,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_labels() {
        let en = Locale::En.labels();
        assert_eq!(en.time_of_day(TimeOfDay::Dawn), "Dawn");
        assert_eq!(en.time_of_day(TimeOfDay::Afternoon), "Afternoon");

        let pt = Locale::Pt.labels();
        assert_eq!(pt.time_of_day(TimeOfDay::Dawn), "Madrugada");
        assert_eq!(pt.time_of_day(TimeOfDay::Night), "Noite");
    }

    #[test]
    fn test_locale_serde_names() {
        assert_eq!(toml::to_string(&LocaleHolder { locale: Locale::Pt }).unwrap(), "locale = \"pt\"\n");
    }

    #[derive(serde::Serialize)]
    struct LocaleHolder {
        locale: Locale,
    }
}
