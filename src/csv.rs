//! csv input/output format and functions

use csv_async::{AsyncWriterBuilder, Terminator};
use rust_decimal::Decimal;

use crate::account::{Account, AuthState, Outcome};
use serde::{Deserialize, Serialize};

use tokio::{
    io::{AsyncRead, AsyncWrite},
    sync::mpsc::Sender,
};
use tokio_stream::{Stream, StreamExt};

// Allowed action types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum RawActionType {
    Login,
    Logout,
    Unlock,
    Withdraw,
}

/// One row of action script
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct RawAction {
    pub action: RawActionType,
    /// password, reset code or amount, depending on `action`
    pub argument: Option<String>,
}

/// take a reader and continuously deserialize actions from it into `sender`
pub async fn deserialize_actions_from_csv_reader<'r, R: AsyncRead + Unpin + Send + 'r>(
    input: R,
    sender: Sender<RawAction>,
) -> anyhow::Result<()> {
    let mut builder = csv_async::AsyncReaderBuilder::new();
    builder.trim(csv_async::Trim::All).flexible(true);

    let mut rdr = builder.create_deserializer(input);

    let _headers = rdr.headers().await?;

    let mut records = rdr.deserialize::<RawAction>();
    while let Some(record) = records.next().await {
        let record: RawAction = record?;
        sender.send(record).await?;
    }

    Ok(())
}

/// account state after one applied action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct StepStatus {
    pub step: usize,
    pub action: RawActionType,
    pub state: AuthState,
    pub result: Outcome,
    pub balance: Decimal,
    pub password_retries: u32,
}

impl StepStatus {
    /// capture what `acc` looks like right after `action` returned `result`
    pub fn new(step: usize, action: RawActionType, result: Outcome, acc: &impl Account) -> Self {
        Self {
            step,
            action,
            state: acc.state(),
            result,
            balance: acc.balance(),
            password_retries: acc.password_retries(),
        }
    }
}

/// read items from `in_stream` and save them as csv rows into `wr`. Headers will be
/// included automatically. Terminator is `\r\n`.
pub async fn summarize_steps(
    in_stream: impl Stream<Item = StepStatus> + Unpin,
    wr: impl AsyncWrite + Unpin,
) -> anyhow::Result<()> {
    let mut in_stream = in_stream;

    let mut builder = AsyncWriterBuilder::new();
    builder.terminator(Terminator::CRLF);

    let mut wr = builder.create_serializer(wr);

    while let Some(status) = in_stream.next().await {
        wr.serialize(status).await?;
    }

    wr.flush().await?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{
        deserialize_actions_from_csv_reader, summarize_steps, RawAction, RawActionType,
        StepStatus,
    };
    use crate::{account::BankAccount, amount::Amount};
    use tokio::sync::mpsc::channel;
    use tokio_stream::{wrappers::ReceiverStream, StreamExt};

    #[tokio::test]
    async fn ser_output_format() -> anyhow::Result<()> {
        let mut acc = BankAccount::new(Amount::new(5000, 0), "pass123", "reset456");
        let first = StepStatus::new(1, RawActionType::Login, acc.login("nope"), &acc);
        acc.login("pass123");
        let result = acc.withdraw_money(Amount::new(125, 2));
        let second = StepStatus::new(2, RawActionType::Withdraw, result, &acc);

        let in_stream = tokio_stream::iter(vec![first, second]);
        let output = Vec::with_capacity(8192);

        let mut wr = tokio::io::BufWriter::new(output);

        summarize_steps(in_stream, &mut wr).await?;

        let expected = "step,action,state,result,balance,password_retries\r\n\
            1,login,LoggedOut,Error,5000,1\r\n\
            2,withdraw,LoggedIn,LoggedIn,4998.75,1\r\n";

        let output_str = String::from_utf8(wr.into_inner()).unwrap();

        assert_eq!(output_str, expected);

        Ok(())
    }

    #[tokio::test]
    async fn des_input_format() -> anyhow::Result<()> {
        let raw_in = r#"action, argument
withdraw, 1000
login, wrong1
logout,
logout
unlock, reset456
withdraw, 20.5"#;

        let (tx, rx) = channel(2);
        tokio::spawn(
            async move { deserialize_actions_from_csv_reader(raw_in.as_bytes(), tx).await },
        );

        let in_vec: Vec<RawAction> = ReceiverStream::new(rx).collect().await;
        assert_eq!(in_vec.len(), 6);
        assert_eq!(
            in_vec[1],
            RawAction {
                action: RawActionType::Login,
                argument: Some("wrong1".into())
            }
        );
        assert_eq!(
            in_vec[2],
            RawAction {
                action: RawActionType::Logout,
                argument: None
            }
        );
        assert_eq!(in_vec[3].action, RawActionType::Logout);
        assert_eq!(in_vec[5].argument.as_deref(), Some("20.5"));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_action_stops_reading() {
        let raw_in = "action,argument\nlogin,pass123\ntransfer,10\nlogout,\n";

        let (tx, rx) = channel(8);
        let task = tokio::spawn(deserialize_actions_from_csv_reader(raw_in.as_bytes(), tx));

        let in_vec: Vec<RawAction> = ReceiverStream::new(rx).collect().await;
        assert_eq!(in_vec.len(), 1);
        assert!(task.await.unwrap().is_err());
    }
}
