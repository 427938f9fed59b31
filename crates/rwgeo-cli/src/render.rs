use rwgeo_core::lang::province_display_name;
use rwgeo_core::{
    AuditReport, CodeCheck, DbStats, DefaultBackend, FuzzyHit, Language, Level, ParentChildCheck,
    Suggestion, Unit,
};
use serde::Serialize;

type U<'a> = Unit<'a, DefaultBackend>;

/// Text or JSON output for every command.
pub struct Printer {
    json: bool,
    lang: Language,
}

impl Printer {
    pub fn new(json: bool, lang: Language) -> Self {
        Self { json, lang }
    }

    fn emit<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    fn name<'a>(&self, unit: &U<'a>) -> &'a str {
        if unit.level() == Level::Province {
            province_display_name(unit.name(), self.lang)
        } else {
            unit.name()
        }
    }

    fn line(&self, unit: &U<'_>) -> String {
        format!("{:<20} {:<9} {}", unit.code(), unit.level(), self.name(unit))
    }

    pub fn message(&self, text: &str) -> anyhow::Result<()> {
        if self.json {
            return self.emit(&serde_json::json!({ "message": text }));
        }
        println!("{text}");
        Ok(())
    }

    pub fn stats(&self, stats: &DbStats) -> anyhow::Result<()> {
        if self.json {
            return self.emit(stats);
        }
        println!("Database statistics:");
        for level in Level::ALL {
            println!("  {:<10} {}", level.collection(), stats.count(level));
        }
        println!("  {:<10} {}", "total", stats.total());
        Ok(())
    }

    pub fn unit(&self, unit: &U<'_>) -> anyhow::Result<()> {
        if self.json {
            return self.emit(unit);
        }
        println!("Code:   {}", unit.code());
        println!("Name:   {}", self.name(unit));
        println!("Level:  {}", unit.level());
        println!("Slug:   {}", unit.slug());
        if let Some(parent) = unit.parent_code() {
            println!("Parent: {parent}");
        }
        if let Some((lat, lng)) = unit.center() {
            println!("Center: {lat:.4}, {lng:.4}");
        }
        Ok(())
    }

    pub fn units(&self, units: &[U<'_>]) -> anyhow::Result<()> {
        if self.json {
            return self.emit(units);
        }
        if units.is_empty() {
            println!("(no units)");
        }
        for unit in units {
            println!("{}", self.line(unit));
        }
        Ok(())
    }

    /// Root-first path, indented by depth.
    pub fn chain(&self, chain: &[U<'_>]) -> anyhow::Result<()> {
        if self.json {
            return self.emit(chain);
        }
        if chain.is_empty() {
            println!("(no units)");
        }
        for (i, unit) in chain.iter().enumerate() {
            println!("{}{}", "  ".repeat(i), self.line(unit));
        }
        Ok(())
    }

    pub fn fuzzy(&self, hits: &[FuzzyHit<'_, DefaultBackend>]) -> anyhow::Result<()> {
        if self.json {
            return self.emit(hits);
        }
        if hits.is_empty() {
            println!("(no matches)");
        }
        for hit in hits {
            println!(
                "{:.3}  d={}  {}",
                hit.score,
                hit.distance,
                self.line(&hit.unit)
            );
        }
        Ok(())
    }

    pub fn suggestions(&self, suggestions: &[Suggestion<'_, DefaultBackend>]) -> anyhow::Result<()> {
        if self.json {
            return self.emit(suggestions);
        }
        if suggestions.is_empty() {
            println!("(no suggestions)");
        }
        for s in suggestions {
            let how = match s.distance {
                Some(d) => format!("{:?}/{:?} d={d}", s.match_type, s.field),
                None => format!("{:?}/{:?}", s.match_type, s.field),
            };
            println!("{how:<18} {}", self.line(&s.unit));
        }
        Ok(())
    }

    pub fn code_check(&self, code: &str, check: &CodeCheck) -> anyhow::Result<()> {
        if self.json {
            return self.emit(check);
        }
        match (&check.level, &check.reason) {
            (Some(level), _) => println!("{code}: valid {level} code"),
            (None, Some(reason)) => println!("{code}: invalid ({reason})"),
            (None, None) => println!("{code}: invalid"),
        }
        Ok(())
    }

    pub fn pair_check(
        &self,
        parent: &str,
        child: &str,
        check: &ParentChildCheck,
    ) -> anyhow::Result<()> {
        if self.json {
            return self.emit(check);
        }
        if check.valid {
            println!("{parent} -> {child}: valid");
        } else {
            println!(
                "{parent} -> {child}: invalid ({})",
                check.reason.as_deref().unwrap_or("unknown")
            );
        }
        Ok(())
    }

    pub fn audit(&self, report: &AuditReport) -> anyhow::Result<()> {
        if self.json {
            return self.emit(report);
        }
        let s = &report.summary;
        println!("Audited {} units: {} issue(s)", s.total_units, s.issues());
        for (label, n) in [
            ("orphaned", s.orphaned),
            ("invalid_parent", s.invalid_parent),
            ("circular_reference", s.circular_reference),
            ("missing_unit", s.missing_unit),
            ("duplicate_code", s.duplicate_code),
            ("duplicate_slug", s.duplicate_slug),
        ] {
            if n > 0 {
                println!("  {label:<20} {n}");
            }
        }
        for issue in &report.issues {
            println!("  [{:?}] {}: {}", issue.kind, issue.code, issue.message);
        }
        Ok(())
    }
}
