mod snapshots;
mod walkthrough;
