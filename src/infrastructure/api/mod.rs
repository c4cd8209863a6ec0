//! Expense API client adapter.

mod client;
mod dto;

pub use client::ExpenseApiClient;
