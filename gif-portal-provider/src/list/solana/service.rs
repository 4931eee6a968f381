//! Solana ListService trait 实现

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signer;
use solana_sdk::signer::keypair::{Keypair, read_keypair_file};
use solana_sdk::transaction::Transaction;

use crate::error::{ProviderError, Result};
use crate::traits::{FailureContext, FailureMapper, ListService};
use crate::types::{Commitment, Identity, ListAccountId, RemoteList};
use crate::utils::log_sanitizer::link_for_log;

use super::PayerSource;
use super::program::{append_item_instruction, create_list_instruction, decode_list_account};
use super::rpc::execute_rpc;

/// Anchor 列表程序客户端
pub struct SolanaListService {
    client: RpcClient,
    program_id: Pubkey,
    payer: Arc<dyn PayerSource>,
    /// 仅创建账户时需要
    list_account_keypair: Option<PathBuf>,
}

impl SolanaListService {
    pub fn new(
        rpc_url: impl Into<String>,
        program_id: &str,
        commitment: Commitment,
        payer: Arc<dyn PayerSource>,
        list_account_keypair: Option<PathBuf>,
    ) -> Result<Self> {
        let commitment = match commitment {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        };
        let mut service = Self {
            client: RpcClient::new_with_commitment(rpc_url.into(), commitment),
            program_id: Pubkey::default(),
            payer,
            list_account_keypair,
        };
        service.program_id = service.parse_pubkey("program_id", program_id)?;
        Ok(service)
    }

    pub fn rpc_url(&self) -> String {
        self.client.url()
    }

    fn parse_pubkey(&self, param: &str, value: &str) -> Result<Pubkey> {
        Pubkey::from_str(value).map_err(|e| self.bad_parameter(param, e))
    }

    /// 校验 submitter/owner 与付费钱包一致
    fn payer_for(&self, signer: &Identity) -> Result<Arc<Keypair>> {
        let payer = self.payer.payer()?;
        if payer.pubkey().to_string() != signer.as_str() {
            return Err(self.bad_parameter(
                "signer",
                format!("{signer} is not the wallet that signs transactions"),
            ));
        }
        Ok(payer)
    }

    fn load_list_keypair(&self, account: &Pubkey) -> Result<Keypair> {
        let Some(path) = &self.list_account_keypair else {
            return Err(self.bad_parameter(
                "list_account_keypair",
                "a keypair for the list account is required to create it",
            ));
        };
        let keypair = read_keypair_file(path).map_err(|e| ProviderError::StorageError {
            provider: self.provider_name().to_string(),
            detail: format!("{}: {e}", path.display()),
        })?;
        if keypair.pubkey() != *account {
            return Err(self.bad_parameter(
                "list_account_keypair",
                format!("keypair is for {}, not {account}", keypair.pubkey()),
            ));
        }
        Ok(keypair)
    }

    /// 签名、发送并等待确认
    async fn send_transaction(
        &self,
        instruction: Instruction,
        payer: &Keypair,
        signers: &[&Keypair],
        account: &ListAccountId,
    ) -> Result<()> {
        let ctx = || FailureContext {
            account: Some(account.to_string()),
            is_write: true,
        };

        let blockhash = execute_rpc(
            self.provider_name(),
            "getLatestBlockhash",
            account.as_str(),
            self.client.get_latest_blockhash(),
        )
        .await
        .map_err(|raw| self.map_error(raw, ctx()))?;

        let tx = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&payer.pubkey()),
            signers,
            blockhash,
        );

        let signature = execute_rpc(
            self.provider_name(),
            "sendAndConfirmTransaction",
            account.as_str(),
            self.client.send_and_confirm_transaction(&tx),
        )
        .await
        .map_err(|raw| self.map_error(raw, ctx()))?;

        log::info!("[{}] Transaction confirmed: {signature}", self.provider_name());
        Ok(())
    }
}

#[async_trait]
impl ListService for SolanaListService {
    fn id(&self) -> &'static str {
        "solana"
    }

    async fn read_account(&self, account: &ListAccountId) -> Result<RemoteList> {
        let address = self.parse_pubkey("account", account.as_str())?;

        let response = execute_rpc(
            self.provider_name(),
            "getAccountInfo",
            account.as_str(),
            self.client
                .get_account_with_commitment(&address, self.client.commitment()),
        )
        .await
        .map_err(|raw| {
            self.map_error(
                raw,
                FailureContext {
                    account: Some(account.to_string()),
                    is_write: false,
                },
            )
        })?;

        let Some(remote) = response.value else {
            return Err(ProviderError::AccountNotFound {
                provider: self.provider_name().to_string(),
                account: account.to_string(),
            });
        };

        if remote.owner != self.program_id {
            return Err(self.bad_account_data(
                account.as_str(),
                format!("owned by {}, expected {}", remote.owner, self.program_id),
            ));
        }

        decode_list_account(&remote.data).map_err(|e| self.bad_account_data(account.as_str(), e))
    }

    async fn create_account(&self, account: &ListAccountId, owner: &Identity) -> Result<()> {
        let address = self.parse_pubkey("account", account.as_str())?;
        let payer = self.payer_for(owner)?;
        let list_keypair = self.load_list_keypair(&address)?;

        let instruction = create_list_instruction(&self.program_id, &address, &payer.pubkey());
        self.send_transaction(instruction, &payer, &[payer.as_ref(), &list_keypair], account)
            .await?;

        log::info!("[{}] List account {account} created", self.provider_name());
        Ok(())
    }

    async fn append_item(
        &self,
        account: &ListAccountId,
        link: &str,
        submitter: &Identity,
    ) -> Result<()> {
        let address = self.parse_pubkey("account", account.as_str())?;
        let payer = self.payer_for(submitter)?;

        let instruction =
            append_item_instruction(&self.program_id, &address, &payer.pubkey(), link).map_err(
                |e| ProviderError::SerializationError {
                    provider: self.provider_name().to_string(),
                    detail: e.to_string(),
                },
            )?;
        self.send_transaction(instruction, &payer, &[payer.as_ref()], account)
            .await?;

        log::info!(
            "[{}] Appended {} to {account}",
            self.provider_name(),
            link_for_log(link)
        );
        Ok(())
    }
}
