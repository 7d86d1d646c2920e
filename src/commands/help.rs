pub fn execute() -> String {
    [
        "📖 Commands",
        "",
        "Session",
        "  login <username> <password>                      Log in",
        "  register <username> <email> <password> <confirm> Create a user",
        "  logout                                           End the session",
        "  whoami                                           Show the logged-in user",
        "",
        "Accounts",
        "  dashboard                                        Accounts and recent activity",
        "  open <type> <initial deposit>                    Open an account",
        "  balance <account id>                             Current balance",
        "",
        "Transactions",
        "  transfer <from id> <to number> <amount> [note]   Send money",
        "  history [account id] [page]                      Transaction history, 10 per page",
        "",
        "  help | quit",
    ]
    .join("\n")
}
