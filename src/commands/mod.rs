pub mod context_menu;

// The dashboard is remote content: keep this list to what
// `capabilities/dashboard.json` grants it.
