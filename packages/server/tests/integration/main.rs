mod common;
mod ledger;
mod moderation;
