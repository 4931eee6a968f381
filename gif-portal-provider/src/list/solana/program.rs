//! 链上列表程序的账户布局与指令编码
//!
//! Account layout (Anchor, borsh):
//! `[8-byte discriminator][total_gifs: u64][gif_list: Vec<{ gif_link: String, user_address: Pubkey }>]`
//!
//! The account is allocated with a fixed size, so bytes after the list are zero padding.

use borsh::{BorshDeserialize, BorshSerialize};
use sha2::{Digest, Sha256};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

use crate::types::{Identity, RemoteItem, RemoteList};

const DISCRIMINATOR_LEN: usize = 8;

/// `sha256("<namespace>:<name>")[..8]`
fn discriminator(namespace: &str, name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let hash = Sha256::digest(format!("{namespace}:{name}").as_bytes());
    let mut out = [0u8; DISCRIMINATOR_LEN];
    out.copy_from_slice(&hash[..DISCRIMINATOR_LEN]);
    out
}

#[derive(Debug, BorshSerialize, BorshDeserialize)]
struct ItemStruct {
    gif_link: String,
    user_address: [u8; 32],
}

#[derive(Debug, BorshSerialize, BorshDeserialize)]
struct BaseAccount {
    total_gifs: u64,
    gif_list: Vec<ItemStruct>,
}

/// 账户数据解码错误
#[derive(Debug)]
pub(crate) enum DecodeError {
    TooShort(usize),
    Discriminator,
    Borsh(std::io::Error),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort(len) => write!(f, "account data too short ({len} bytes)"),
            Self::Discriminator => f.write_str("account discriminator mismatch"),
            Self::Borsh(e) => write!(f, "borsh decode failed: {e}"),
        }
    }
}

/// 解码列表账户数据
pub(crate) fn decode_list_account(data: &[u8]) -> Result<RemoteList, DecodeError> {
    if data.len() < DISCRIMINATOR_LEN {
        return Err(DecodeError::TooShort(data.len()));
    }
    let (disc, mut body) = data.split_at(DISCRIMINATOR_LEN);
    if disc != discriminator("account", "BaseAccount") {
        return Err(DecodeError::Discriminator);
    }
    // deserialize 而非 try_from_slice：尾部填充不算错误
    let account = BaseAccount::deserialize(&mut body).map_err(DecodeError::Borsh)?;

    Ok(RemoteList {
        total_count: account.total_gifs,
        items: account
            .gif_list
            .into_iter()
            .map(|item| {
                let submitter = Pubkey::new_from_array(item.user_address);
                RemoteItem::new(item.gif_link, Identity::new(submitter.to_string()))
            })
            .collect(),
    })
}

/// `start_stuff_off`：创建列表账户
pub(crate) fn create_list_instruction(
    program_id: &Pubkey,
    list_account: &Pubkey,
    user: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*list_account, true),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: discriminator("global", "start_stuff_off").to_vec(),
    }
}

/// `add_gif(gif_link)`：追加一条链接
pub(crate) fn append_item_instruction(
    program_id: &Pubkey,
    list_account: &Pubkey,
    user: &Pubkey,
    link: &str,
) -> std::io::Result<Instruction> {
    let mut data = discriminator("global", "add_gif").to_vec();
    data.extend(borsh::to_vec(link)?);

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*list_account, false),
            AccountMeta::new(*user, true),
        ],
        data,
    })
}

/// 按链上布局编码账户数据，后接 `padding` 个零字节
#[cfg(test)]
pub(crate) fn encode_list_account(
    total: u64,
    items: &[(&str, [u8; 32])],
    padding: usize,
) -> Vec<u8> {
    let mut data = discriminator("account", "BaseAccount").to_vec();
    data.extend(total.to_le_bytes());
    data.extend(u32::try_from(items.len()).unwrap().to_le_bytes());
    for (link, addr) in items {
        data.extend(u32::try_from(link.len()).unwrap().to_le_bytes());
        data.extend(link.as_bytes());
        data.extend(addr);
    }
    data.extend(vec![0u8; padding]);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::encode_list_account as encode_account;

    #[test]
    fn discriminator_matches_anchor_convention() {
        let expected = Sha256::digest(b"global:add_gif");
        assert_eq!(discriminator("global", "add_gif"), expected[..8]);
    }

    #[test]
    fn decodes_account_with_trailing_padding() {
        let addr = [7u8; 32];
        let data = encode_account(2, &[("https://a/1.gif", addr), ("https://b/2.gif", addr)], 512);
        let list = decode_list_account(&data).unwrap();

        assert_eq!(list.total_count, 2);
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].link, "https://a/1.gif");
        assert_eq!(
            list.items[1].submitter.as_str(),
            Pubkey::new_from_array(addr).to_string()
        );
    }

    #[test]
    fn decodes_empty_list() {
        let list = decode_list_account(&encode_account(0, &[], 0)).unwrap();
        assert_eq!(list, RemoteList::default());
    }

    #[test]
    fn rejects_short_data() {
        assert!(matches!(
            decode_list_account(&[1, 2, 3]),
            Err(DecodeError::TooShort(3))
        ));
    }

    #[test]
    fn rejects_foreign_discriminator() {
        let mut data = encode_account(0, &[], 0);
        data[0] ^= 0xff;
        assert!(matches!(
            decode_list_account(&data),
            Err(DecodeError::Discriminator)
        ));
    }

    #[test]
    fn rejects_truncated_item() {
        let mut data = encode_account(1, &[("https://a/1.gif", [1u8; 32])], 0);
        data.truncate(data.len() - 4);
        assert!(matches!(
            decode_list_account(&data),
            Err(DecodeError::Borsh(_))
        ));
    }

    #[test]
    fn append_instruction_layout() {
        let program = Pubkey::new_unique();
        let list = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let ix = append_item_instruction(&program, &list, &user, "abc").unwrap();

        assert_eq!(ix.program_id, program);
        assert_eq!(&ix.data[..8], &discriminator("global", "add_gif"));
        assert_eq!(&ix.data[8..12], &3u32.to_le_bytes());
        assert_eq!(&ix.data[12..], b"abc");
        assert!(ix.accounts[0].is_writable && !ix.accounts[0].is_signer);
        assert!(ix.accounts[1].is_signer);
    }

    #[test]
    fn create_instruction_signs_with_list_account() {
        let program = Pubkey::new_unique();
        let list = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let ix = create_list_instruction(&program, &list, &user);

        assert_eq!(ix.data, discriminator("global", "start_stuff_off"));
        assert_eq!(ix.accounts.len(), 3);
        assert!(ix.accounts[0].is_signer);
        assert_eq!(ix.accounts[2].pubkey, system_program::id());
    }
}
