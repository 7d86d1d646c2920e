use super::render_outcome;
use crate::api::bank::{ClientError, SessionClient};
use crate::services::transfer_service::{self, TransferForm};

pub async fn execute(client: &SessionClient, args: &[&str]) -> Result<String, ClientError> {
    if args.len() < 3 {
        return Ok(
            "Usage: `transfer <from account id> <to account number> <amount> [description]`\n\
             Example: `transfer 65a1f0 ACC1002 25.50 rent for March`\n\
             The amount may not exceed the source account's balance."
                .to_string(),
        );
    }

    let form = TransferForm {
        from_account: args[0].to_string(),
        to_account_number: args[1].to_string(),
        amount: args[2].trim_start_matches('$').to_string(),
        description: args[3..].join(" "),
    };

    let outcome = transfer_service::execute_transfer(client, &form).await?;
    Ok(render_outcome(&outcome, "💸"))
}
