//! Loan EMI and SIP future-value math.
//!
//! Both calculators share the same monthly compounding model: the annual
//! percentage rate divided by 12, applied over a term counted in months.
//! A zero rate is a legitimate input and degenerates to simple division,
//! not a division by zero.

use crate::error::ToolError;
use serde::Serialize;

/// Terms of an amortized loan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    /// Amount borrowed, in currency units.
    pub principal: f64,
    /// Annual interest rate as a percentage (8.5 means 8.5 %).
    pub annual_rate_pct: f64,
    /// Repayment term in months.
    pub term_months: u32,
}

/// Terms of a systematic investment plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SipTerms {
    /// Contribution per month, in currency units.
    pub monthly_amount: f64,
    /// Expected annual return as a percentage.
    pub annual_rate_pct: f64,
    /// Investment horizon in months.
    pub term_months: u32,
}

/// Result of [`emi`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmiBreakdown {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Result of [`sip`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SipProjection {
    pub future_value: f64,
    pub total_invested: f64,
    pub total_returns: f64,
}

/// Equated monthly installment for a loan:
/// `P·r·(1+r)^n / ((1+r)^n − 1)` with `r` the monthly rate.
pub fn emi(terms: &LoanTerms) -> Result<EmiBreakdown, ToolError> {
    check_amount("principal", terms.principal)?;
    check_rate(terms.annual_rate_pct)?;
    check_term(terms.term_months)?;

    let n = terms.term_months as f64;
    let r = monthly_rate(terms.annual_rate_pct);

    let monthly_payment = if r == 0.0 {
        terms.principal / n
    } else {
        let growth = (1.0 + r).powi(terms.term_months as i32);
        terms.principal * r * growth / (growth - 1.0)
    };

    let total_payment = monthly_payment * n;
    Ok(EmiBreakdown {
        monthly_payment,
        total_payment,
        total_interest: total_payment - terms.principal,
    })
}

/// Future value of a monthly contribution plan:
/// `A·(((1+r)^n − 1)/r)·(1+r)`, contributions at the start of each month.
pub fn sip(terms: &SipTerms) -> Result<SipProjection, ToolError> {
    check_amount("monthly amount", terms.monthly_amount)?;
    check_rate(terms.annual_rate_pct)?;
    check_term(terms.term_months)?;

    let n = terms.term_months as f64;
    let r = monthly_rate(terms.annual_rate_pct);
    let total_invested = terms.monthly_amount * n;

    let future_value = if r == 0.0 {
        total_invested
    } else {
        let growth = (1.0 + r).powi(terms.term_months as i32);
        terms.monthly_amount * ((growth - 1.0) / r) * (1.0 + r)
    };

    Ok(SipProjection {
        future_value,
        total_invested,
        total_returns: future_value - total_invested,
    })
}

fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 12.0 / 100.0
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ToolError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ToolError::invalid_input(
            field,
            "must be greater than zero",
        ));
    }
    Ok(())
}

fn check_rate(value: f64) -> Result<(), ToolError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ToolError::invalid_input(
            "interest rate",
            "must be zero or greater",
        ));
    }
    Ok(())
}

fn check_term(months: u32) -> Result<(), ToolError> {
    if months == 0 {
        return Err(ToolError::invalid_input(
            "term",
            "must be at least one month",
        ));
    }
    Ok(())
}
